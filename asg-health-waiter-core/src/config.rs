//! Polling policy for the target health waiter

use crate::error::{HealthWaiterError, HealthWaiterResult};
use std::time::Duration;

/// Delay between health queries. Matches the ELBv2 `target_in_service` waiter.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Health queries per target group before giving up (15s x 40 = 10 minutes).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

impl WaiterConfig {
    pub fn new(poll_interval: Duration, max_attempts: u32) -> HealthWaiterResult<Self> {
        let config = Self {
            poll_interval,
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HealthWaiterResult<()> {
        if self.max_attempts == 0 {
            return Err(HealthWaiterError::config(
                "max attempts must be at least 1",
            ));
        }
        Ok(())
    }

    /// Upper bound on time spent sleeping for a single target group
    pub fn max_wait(&self) -> Duration {
        self.poll_interval
            .saturating_mul(self.max_attempts.saturating_sub(1))
    }
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
