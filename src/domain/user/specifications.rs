//! Reusable specifications over the [`User`] aggregate.
//!
//! Time-relative specifications take the reference instant up front, so the
//! threshold is fixed at construction and every candidate in a batch is
//! judged against the same cutoff.

use crate::domain::foundation::{Specification, Timestamp};

use super::role::Role;
use super::user::User;

/// Satisfied when the user's status is `active`.
pub fn is_active() -> Specification<User> {
    Specification::satisfying(|user: &User| user.status().is_active())
}

/// Satisfied when the user's status is anything but `active`.
pub fn is_not_active() -> Specification<User> {
    is_active().not()
}

/// Satisfied when the user holds exactly the given role.
pub fn has_role(role: Role) -> Specification<User> {
    Specification::satisfying(move |user: &User| user.role() == role)
}

/// Satisfied when the user holds the client role.
pub fn is_client() -> Specification<User> {
    has_role(Role::Client)
}

/// Satisfied when the user holds the admin role.
pub fn is_admin() -> Specification<User> {
    has_role(Role::Admin)
}

/// Satisfied when the user registered strictly more than `days` days before
/// `now`.
pub fn registered_before_days(days: i64, now: Timestamp) -> Specification<User> {
    let threshold = now.minus_days(days);
    Specification::satisfying(move |user: &User| user.created_at().is_before(&threshold))
}

/// Satisfied when the user's last login was strictly more than `days` days
/// before `now`. A user who never logged in is vacuously satisfied.
pub fn last_login_before_days(days: i64, now: Timestamp) -> Specification<User> {
    let threshold = now.minus_days(days);
    Specification::satisfying(move |user: &User| match user.last_login_at() {
        Some(last_login) => last_login.is_before(&threshold),
        None => true,
    })
}
