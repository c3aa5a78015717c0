//! ManageUserStatus - Batch handler sweeping account statuses.
//!
//! Two rules run sequentially over the same loaded set:
//!
//! 1. Accounts registered more than `activation_days` ago that are not
//!    active are activated.
//! 2. Client accounts registered more than `client_dormancy_days` ago are
//!    deactivated.
//!
//! Rule 2 sees rule 1's in-memory result, so a client old enough for both
//! ends up inactive. A failure on one user is logged and counted, never
//! aborting the rest of the sweep.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::user::specifications::{is_client, is_not_active, registered_before_days};
use crate::domain::user::{Status, User};
use crate::ports::UserRepository;

/// Thresholds driving the sweep, in days.
#[derive(Debug, Clone, Copy)]
pub struct SweepPolicy {
    pub activation_days: i64,
    pub client_dormancy_days: i64,
}

impl Default for SweepPolicy {
    fn default() -> Self {
        Self {
            activation_days: 7,
            client_dormancy_days: 90,
        }
    }
}

/// Outcome counts for one sweep run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: usize,
    pub activated: usize,
    pub deactivated: usize,
    pub failed: usize,
}

/// Handler running the status sweep.
pub struct StatusSweepHandler {
    repository: Arc<dyn UserRepository>,
    policy: SweepPolicy,
}

impl StatusSweepHandler {
    pub fn new(repository: Arc<dyn UserRepository>, policy: SweepPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(&self) -> Result<SweepReport, DomainError> {
        let now = Timestamp::now();
        let mut users = self.repository.find_all().await?;

        let mut report = SweepReport {
            scanned: users.len(),
            ..SweepReport::default()
        };

        let needs_activation =
            registered_before_days(self.policy.activation_days, now).and(&is_not_active());
        for user in users.iter_mut() {
            if needs_activation.is_satisfied_by(user) {
                match self.apply(user, Status::Active, now).await {
                    Ok(()) => report.activated += 1,
                    Err(error) => {
                        warn!(user_id = %user.id(), %error, "status sweep: activation failed");
                        report.failed += 1;
                    }
                }
            }
        }

        let dormant_client =
            registered_before_days(self.policy.client_dormancy_days, now).and(&is_client());
        for user in users.iter_mut() {
            if dormant_client.is_satisfied_by(user) {
                match self.apply(user, Status::Inactive, now).await {
                    Ok(()) => report.deactivated += 1,
                    Err(error) => {
                        warn!(user_id = %user.id(), %error, "status sweep: deactivation failed");
                        report.failed += 1;
                    }
                }
            }
        }

        info!(
            scanned = report.scanned,
            activated = report.activated,
            deactivated = report.deactivated,
            failed = report.failed,
            "status sweep finished"
        );

        Ok(report)
    }

    async fn apply(
        &self,
        user: &mut User,
        status: Status,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        user.change_status(status, now);
        self.repository.save(user).await
    }
}
