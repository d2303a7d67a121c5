//! AWS ELBv2 client wrapper for target health queries

use crate::aws::{AwsError, AwsResult};
use crate::types::{HealthObservation, HealthState, InstanceId, TargetGroupRef};
use aws_sdk_elasticloadbalancingv2::operation::describe_target_health::DescribeTargetHealthError;
use aws_sdk_elasticloadbalancingv2::types::{
    TargetDescription, TargetHealthDescription, TargetHealthStateEnum,
};
use aws_sdk_elasticloadbalancingv2::Client as Elbv2Client;

pub struct AwsElbv2Client {
    client: Elbv2Client,
}

impl AwsElbv2Client {
    pub fn new(client: Elbv2Client) -> Self {
        Self { client }
    }

    /// Describe the health of one instance within one target group
    pub async fn describe_target_health(
        &self,
        instance_id: &InstanceId,
        target_group: &TargetGroupRef,
    ) -> AwsResult<HealthObservation> {
        let target = TargetDescription::builder().id(instance_id.as_str()).build();

        let result = self
            .client
            .describe_target_health()
            .target_group_arn(target_group.arn())
            .targets(target)
            .send()
            .await;

        match result {
            Ok(response) => Ok(observe(response.target_health_descriptions())),
            Err(e) if is_unregistered_target(e.as_service_error()) => {
                Ok(HealthObservation::Absent)
            }
            Err(e) => Err(AwsError::Elbv2Error(format!(
                "Failed to describe target health in '{target_group}': {e:?}"
            ))),
        }
    }
}

/// Targets the load balancer does not know about yet are reported as
/// `InvalidTarget`; that means "not registered", not a failure.
fn is_unregistered_target(error: Option<&DescribeTargetHealthError>) -> bool {
    error.is_some_and(DescribeTargetHealthError::is_invalid_target_exception)
}

/// Collapse the returned descriptions into a single observation.
/// In service only when every description reports healthy.
fn observe(descriptions: &[TargetHealthDescription]) -> HealthObservation {
    let mut tracked = false;

    for health in descriptions.iter().filter_map(TargetHealthDescription::target_health) {
        tracked = true;
        let state = health.state().map_or(HealthState::Unavailable, map_state);
        if !state.is_in_service() {
            return HealthObservation::State {
                state,
                reason: health.reason().map(|r| r.as_str().to_string()),
            };
        }
    }

    if tracked {
        HealthObservation::state(HealthState::InService)
    } else {
        HealthObservation::Absent
    }
}

fn map_state(state: &TargetHealthStateEnum) -> HealthState {
    match state.as_str() {
        "healthy" => HealthState::InService,
        "initial" => HealthState::Initial,
        "unhealthy" => HealthState::Unhealthy,
        "draining" | "unhealthy.draining" => HealthState::Draining,
        "unused" => HealthState::Unused,
        "unavailable" => HealthState::Unavailable,
        other => {
            log::debug!("Unrecognized target health state '{}'", other);
            HealthState::Unavailable
        }
    }
}
