//! Orchestration: resolve group, enumerate target groups, wait on each in turn

use crate::error::{HealthWaiterError, HealthWaiterResult};
use crate::provider::HealthProvider;
use crate::types::{InstanceId, TargetGroupOutcome, WaitReport};
use log::info;

impl<P: HealthProvider> super::service::HealthWaiterService<P> {
    /// Wait until `instance_id` is in service in every target group attached
    /// to its Auto Scaling group.
    ///
    /// Target groups are waited on sequentially in provider order and the run
    /// stops at the first failure; later target groups are never queried.
    pub async fn wait_until_healthy(
        &self,
        instance_id: &InstanceId,
    ) -> HealthWaiterResult<WaitReport> {
        if instance_id.as_str().trim().is_empty() {
            return Err(HealthWaiterError::config("instance id must not be empty"));
        }

        info!(
            "Waiting until instance {} is healthy in its target groups",
            instance_id
        );

        let group = self.resolve_group(instance_id).await?;
        info!("Found ASG: {}", group);

        let target_groups = self.enumerate_target_groups(&group).await?;
        info!("ASG configures {} target groups", target_groups.len());

        let mut outcomes = Vec::with_capacity(target_groups.len());
        for target_group in &target_groups {
            info!(
                "Waiting for instance to register healthy in {}",
                target_group.name()
            );
            let attempts = self
                .waiter
                .await_in_service(&self.provider, instance_id, target_group)
                .await?;
            outcomes.push(TargetGroupOutcome {
                arn: target_group.arn().to_string(),
                name: target_group.name().to_string(),
                attempts,
            });
        }

        info!("Instance showing as healthy in all target groups");

        Ok(WaitReport {
            instance_id: instance_id.clone(),
            auto_scaling_group: group,
            target_groups: outcomes,
        })
    }
}
