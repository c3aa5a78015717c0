//! Status sweep configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::user::SweepPolicy;

/// Thresholds for the status sweep, in days.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Accounts older than this and not active get activated.
    #[serde(default = "default_activation_days")]
    pub activation_days: i64,

    /// Client accounts older than this get deactivated.
    #[serde(default = "default_client_dormancy_days")]
    pub client_dormancy_days: i64,
}

fn default_activation_days() -> i64 {
    7
}

fn default_client_dormancy_days() -> i64 {
    90
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            activation_days: default_activation_days(),
            client_dormancy_days: default_client_dormancy_days(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.activation_days <= 0 {
            return Err(ValidationError::InvalidActivationDays);
        }
        if self.client_dormancy_days <= 0 {
            return Err(ValidationError::InvalidClientDormancyDays);
        }
        if self.client_dormancy_days <= self.activation_days {
            return Err(ValidationError::DormancyBelowActivation);
        }
        Ok(())
    }

    pub fn policy(&self) -> SweepPolicy {
        SweepPolicy {
            activation_days: self.activation_days,
            client_dormancy_days: self.client_dormancy_days,
        }
    }
}
