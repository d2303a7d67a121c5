//! Bounded fixed-interval polling until an instance is in service in a target group.
//!
//! Each call runs one small state machine:
//!
//! - poll the provider for the instance's health in the target group
//! - in service: return the number of polls made
//! - any other state, or not yet registered: sleep `poll_interval` and poll again
//! - provider failure: return immediately, it is never treated as "still polling"
//! - `max_attempts` polls without success: [`HealthWaiterError::Timeout`]
//!
//! The interval is constant. No sleep follows the final poll.

use crate::config::WaiterConfig;
use crate::error::{HealthWaiterError, HealthWaiterResult};
use crate::provider::HealthProvider;
use crate::types::{HealthObservation, InstanceId, TargetGroupRef};
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthWaiter {
    config: WaiterConfig,
}

impl HealthWaiter {
    /// Fails with [`HealthWaiterError::Config`] when `config` allows no polls.
    pub fn new(config: WaiterConfig) -> HealthWaiterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WaiterConfig {
        &self.config
    }

    /// Block until `instance_id` is in service in `target_group`.
    ///
    /// Returns the number of health queries issued.
    pub async fn await_in_service<P>(
        &self,
        provider: &P,
        instance_id: &InstanceId,
        target_group: &TargetGroupRef,
    ) -> HealthWaiterResult<u32>
    where
        P: HealthProvider + ?Sized,
    {
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let observation = provider
                .describe_target_health(instance_id, target_group)
                .await?;

            match &observation {
                HealthObservation::State { state, .. } if state.is_in_service() => {
                    debug!(
                        "{} is in service in {} after {} attempt(s)",
                        instance_id, target_group, attempt
                    );
                    return Ok(attempt);
                }
                HealthObservation::State { state, reason } => debug!(
                    "Attempt {}/{}: {} is {} in {} (reason: {})",
                    attempt,
                    max_attempts,
                    instance_id,
                    state,
                    target_group,
                    reason.as_deref().unwrap_or("none")
                ),
                HealthObservation::Absent => debug!(
                    "Attempt {}/{}: {} is not registered in {} yet",
                    attempt, max_attempts, instance_id, target_group
                ),
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        Err(HealthWaiterError::Timeout {
            target_group: target_group.clone(),
            attempts: max_attempts,
        })
    }
}
