//! AWS SDK integration: Auto Scaling and ELBv2 client wrappers.

pub(crate) mod autoscaling_client;
pub(crate) mod elbv2_client;
pub mod provider;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AwsError {
    #[error("Auto Scaling client error: {0}")]
    AutoScalingError(String),
    #[error("ELBv2 client error: {0}")]
    Elbv2Error(String),
    #[error("AWS SDK error: {0}")]
    SdkError(String),
}

pub type AwsResult<T> = Result<T, AwsError>;
