//! Accounts Core - User account domain model
//!
//! This crate implements a self-validating user account aggregate built from
//! immutable value objects, plus a composable specification engine for
//! expressing business predicates over users.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
