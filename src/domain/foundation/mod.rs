//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, error types, and the specification engine
//! that form the shared vocabulary of the accounts domain.

mod address;
mod email;
mod errors;
mod name;
mod phone;
mod specification;
mod timestamp;

pub use address::{Address, AddressRecord, DEFAULT_PROVINCE, PROVINCES};
pub use email::Email;
pub use errors::{DomainError, ErrorCode};
pub use name::PersonName;
pub use phone::Phone;
pub use specification::Specification;
pub use timestamp::Timestamp;
