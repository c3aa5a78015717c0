//! Domain layer: pure business rules, free of IO.

pub mod foundation;
pub mod user;
