//! Capability interface over the cloud provider's read operations.
//!
//! The service layer only talks to this trait, so the AWS SDK backed
//! implementation can be swapped for an in-memory one in tests.

use crate::aws::AwsResult;
use crate::types::{AutoScalingGroupName, HealthObservation, InstanceId, TargetGroupRef};
use async_trait::async_trait;

#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Scaling group membership records for an instance. Empty when the
    /// instance does not exist or belongs to no group.
    async fn describe_group_memberships(
        &self,
        instance_id: &InstanceId,
    ) -> AwsResult<Vec<AutoScalingGroupName>>;

    /// Target groups attached to a scaling group, in provider order
    async fn describe_attached_target_groups(
        &self,
        group: &AutoScalingGroupName,
    ) -> AwsResult<Vec<TargetGroupRef>>;

    /// Current health of the instance within a target group
    async fn describe_target_health(
        &self,
        instance_id: &InstanceId,
        target_group: &TargetGroupRef,
    ) -> AwsResult<HealthObservation>;
}
