//! [`HealthProvider`] backed by the AWS SDK

use crate::aws::autoscaling_client::AwsAutoScalingClient;
use crate::aws::elbv2_client::AwsElbv2Client;
use crate::aws::AwsResult;
use crate::provider::HealthProvider;
use crate::types::{AutoScalingGroupName, HealthObservation, InstanceId, TargetGroupRef};
use async_trait::async_trait;

pub struct AwsHealthProvider {
    autoscaling: AwsAutoScalingClient,
    elbv2: AwsElbv2Client,
}

impl AwsHealthProvider {
    /// Build Auto Scaling and ELBv2 clients from the standard credential
    /// provider chain, optionally pinning the region.
    pub async fn load(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        Self::from_config(&config)
    }

    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self {
            autoscaling: AwsAutoScalingClient::new(aws_sdk_autoscaling::Client::new(config)),
            elbv2: AwsElbv2Client::new(aws_sdk_elasticloadbalancingv2::Client::new(config)),
        }
    }
}

#[async_trait]
impl HealthProvider for AwsHealthProvider {
    async fn describe_group_memberships(
        &self,
        instance_id: &InstanceId,
    ) -> AwsResult<Vec<AutoScalingGroupName>> {
        self.autoscaling
            .describe_auto_scaling_instances(instance_id)
            .await
    }

    async fn describe_attached_target_groups(
        &self,
        group: &AutoScalingGroupName,
    ) -> AwsResult<Vec<TargetGroupRef>> {
        self.autoscaling
            .describe_load_balancer_target_groups(group)
            .await
    }

    async fn describe_target_health(
        &self,
        instance_id: &InstanceId,
        target_group: &TargetGroupRef,
    ) -> AwsResult<HealthObservation> {
        self.elbv2
            .describe_target_health(instance_id, target_group)
            .await
    }
}
