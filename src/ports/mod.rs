//! Ports: trait boundaries the application layer depends on.

mod user_repository;

pub use user_repository::UserRepository;
