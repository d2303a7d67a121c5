//! Domain types shared by the resolver, the waiter and the service layer

use serde::Serialize;
use std::fmt;

/// Identifier of an EC2 instance (e.g. `i-0abc123`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the Auto Scaling group owning an instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AutoScalingGroupName(String);

impl AutoScalingGroupName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AutoScalingGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a load balancer target group, usually its ARN.
///
/// ARNs embed a human readable resource id after the first `/`, for example
/// `arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/web/73e2d6bc24d8a067`
/// has the display name `web/73e2d6bc24d8a067`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetGroupRef(String);

impl TargetGroupRef {
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    pub fn arn(&self) -> &str {
        &self.0
    }

    /// Segment after the first `/`, or the whole identifier when there is none
    pub fn name(&self) -> &str {
        self.0
            .split_once('/')
            .map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for TargetGroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Health of a registered target as reported by the load balancer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthState {
    Initial,
    Unhealthy,
    Draining,
    Unused,
    InService,
    Unavailable,
}

impl HealthState {
    pub fn is_in_service(self) -> bool {
        matches!(self, Self::InService)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Initial => "initial",
            Self::Unhealthy => "unhealthy",
            Self::Draining => "draining",
            Self::Unused => "unused",
            Self::InService => "in service",
            Self::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

/// Result of a single health query for one instance in one target group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthObservation {
    /// Instance is tracked by the target group
    State {
        state: HealthState,
        reason: Option<String>,
    },
    /// Instance is not (yet) tracked by the target group
    Absent,
}

impl HealthObservation {
    pub fn state(state: HealthState) -> Self {
        Self::State {
            state,
            reason: None,
        }
    }

    pub fn is_in_service(&self) -> bool {
        matches!(self, Self::State { state, .. } if state.is_in_service())
    }
}

/// Outcome of waiting on a single target group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetGroupOutcome {
    pub arn: String,
    pub name: String,
    pub attempts: u32,
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitReport {
    pub instance_id: InstanceId,
    pub auto_scaling_group: AutoScalingGroupName,
    pub target_groups: Vec<TargetGroupOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_group_name_from_arn() {
        let tg = TargetGroupRef::new(
            "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/web/73e2d6bc24d8a067",
        );
        assert_eq!(tg.name(), "web/73e2d6bc24d8a067");
        assert_eq!(tg.to_string(), "web/73e2d6bc24d8a067");
    }

    #[test]
    fn test_target_group_name_without_slash() {
        let tg = TargetGroupRef::new("tg-plain");
        assert_eq!(tg.name(), "tg-plain");
        assert_eq!(tg.arn(), "tg-plain");
    }

    #[test]
    fn test_observation_in_service() {
        assert!(HealthObservation::state(HealthState::InService).is_in_service());
        assert!(!HealthObservation::state(HealthState::Draining).is_in_service());
        assert!(!HealthObservation::Absent.is_in_service());
    }

    #[test]
    fn test_report_json_shape() {
        let report = WaitReport {
            instance_id: InstanceId::new("i-1"),
            auto_scaling_group: AutoScalingGroupName::new("asg-a"),
            target_groups: vec![TargetGroupOutcome {
                arn: "arn:x:targetgroup/tg-1".to_string(),
                name: "tg-1".to_string(),
                attempts: 1,
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"instance_id\":\"i-1\""));
        assert!(json.contains("\"auto_scaling_group\":\"asg-a\""));
        assert!(json.contains("\"attempts\":1"));
    }
}
