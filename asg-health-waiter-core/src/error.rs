//! Error taxonomy for a waiting run

use crate::aws::AwsError;
use crate::types::{InstanceId, TargetGroupRef};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthWaiterError {
    /// The instance has no Auto Scaling group membership record
    #[error("Instance {instance_id} was not found in any Auto Scaling group")]
    NotFound { instance_id: InstanceId },

    /// Transport, auth or malformed-response failure from the provider
    #[error(transparent)]
    Provider(#[from] AwsError),

    #[error(
        "Instance did not become healthy in target group {target_group} after {attempts} attempts"
    )]
    Timeout {
        target_group: TargetGroupRef,
        attempts: u32,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HealthWaiterError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,
            Self::NotFound { .. } => 3,
            Self::Provider(_) => 4,
            Self::Timeout { .. } => 5,
        }
    }
}

pub type HealthWaiterResult<T> = Result<T, HealthWaiterError>;
