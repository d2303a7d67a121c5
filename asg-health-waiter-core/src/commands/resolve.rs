//! Group resolution and target group enumeration

use crate::error::{HealthWaiterError, HealthWaiterResult};
use crate::provider::HealthProvider;
use crate::types::{AutoScalingGroupName, InstanceId, TargetGroupRef};
use log::warn;

impl<P: HealthProvider> super::service::HealthWaiterService<P> {
    /// Resolve the Auto Scaling group owning an instance.
    ///
    /// Fails with [`HealthWaiterError::NotFound`] when the provider returns no
    /// membership record.
    pub async fn resolve_group(
        &self,
        instance_id: &InstanceId,
    ) -> HealthWaiterResult<AutoScalingGroupName> {
        let mut groups = self
            .provider
            .describe_group_memberships(instance_id)
            .await?;

        if groups.is_empty() {
            return Err(HealthWaiterError::NotFound {
                instance_id: instance_id.clone(),
            });
        }
        if groups.len() > 1 {
            warn!(
                "Instance {} has {} group membership records, using the first",
                instance_id,
                groups.len()
            );
        }

        Ok(groups.swap_remove(0))
    }

    /// Target groups attached to a group, in provider order. Empty is valid.
    pub async fn enumerate_target_groups(
        &self,
        group: &AutoScalingGroupName,
    ) -> HealthWaiterResult<Vec<TargetGroupRef>> {
        Ok(self.provider.describe_attached_target_groups(group).await?)
    }
}
