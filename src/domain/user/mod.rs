//! The user aggregate and its satellite value objects.

mod loyalty_points;
mod password;
mod role;
mod status;
mod user;
mod user_id;

pub mod specifications;

pub use loyalty_points::LoyaltyPoints;
pub use password::PasswordHash;
pub use role::Role;
pub use status::Status;
pub use user::{AccountKind, NewUser, User, UserRecord};
pub use user_id::UserId;
