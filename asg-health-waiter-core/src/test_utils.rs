//! In-memory [`HealthProvider`] for unit tests

use crate::aws::AwsResult;
use crate::provider::HealthProvider;
use crate::types::{AutoScalingGroupName, HealthObservation, InstanceId, TargetGroupRef};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Replays scripted health observations per target group.
/// The last scripted entry repeats once the script is exhausted.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    memberships: Vec<AutoScalingGroupName>,
    target_groups: Vec<TargetGroupRef>,
    health: Mutex<HashMap<String, Vec<AwsResult<HealthObservation>>>>,
    health_calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_group(mut self, group: &str) -> Self {
        self.memberships.push(AutoScalingGroupName::new(group));
        self
    }

    pub(crate) fn with_health(
        mut self,
        target_group: &TargetGroupRef,
        script: Vec<AwsResult<HealthObservation>>,
    ) -> Self {
        self.target_groups.push(target_group.clone());
        self.health
            .get_mut()
            .expect("health lock poisoned")
            .insert(target_group.arn().to_string(), script);
        self
    }

    pub(crate) fn health_calls(&self, target_group: &TargetGroupRef) -> usize {
        self.health_calls
            .lock()
            .expect("calls lock poisoned")
            .get(target_group.arn())
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl HealthProvider for ScriptedProvider {
    async fn describe_group_memberships(
        &self,
        _instance_id: &InstanceId,
    ) -> AwsResult<Vec<AutoScalingGroupName>> {
        Ok(self.memberships.clone())
    }

    async fn describe_attached_target_groups(
        &self,
        _group: &AutoScalingGroupName,
    ) -> AwsResult<Vec<TargetGroupRef>> {
        Ok(self.target_groups.clone())
    }

    async fn describe_target_health(
        &self,
        _instance_id: &InstanceId,
        target_group: &TargetGroupRef,
    ) -> AwsResult<HealthObservation> {
        *self
            .health_calls
            .lock()
            .expect("calls lock poisoned")
            .entry(target_group.arn().to_string())
            .or_default() += 1;

        let mut health = self.health.lock().expect("health lock poisoned");
        let script = health
            .get_mut(target_group.arn())
            .expect("no health script for target group");
        if script.len() > 1 {
            script.remove(0)
        } else {
            script[0].clone()
        }
    }
}
