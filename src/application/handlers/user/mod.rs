//! User command and query handlers.

mod get_user;
mod manage_user_status;
mod register_user;

pub use get_user::{GetUserHandler, GetUserQuery};
pub use manage_user_status::{StatusSweepHandler, SweepPolicy, SweepReport};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
