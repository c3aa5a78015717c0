//! Application layer: use-case handlers orchestrating the domain over ports.

pub mod handlers;
