//! This crate provides the core logic for asg-health-waiter:
//! - Auto Scaling group resolution for an instance
//! - Target group enumeration for a group
//! - Bounded, fixed-interval polling of target health until the instance is in service
//!

mod aws;
pub mod commands;
mod config;
mod error;
mod provider;
mod types;
mod waiter;

#[cfg(test)]
mod test_utils;

// Re-exports for a small, focused public API
pub use aws::provider::AwsHealthProvider;
pub use aws::{AwsError, AwsResult};
pub use commands::HealthWaiterService;
pub use config::{WaiterConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL};
pub use error::{HealthWaiterError, HealthWaiterResult};
pub use provider::HealthProvider;
pub use types::{
    AutoScalingGroupName, HealthObservation, HealthState, InstanceId, TargetGroupOutcome,
    TargetGroupRef, WaitReport,
};
pub use waiter::HealthWaiter;
