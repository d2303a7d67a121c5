//! AWS Auto Scaling client wrapper for group and target group lookups

use crate::aws::{AwsError, AwsResult};
use crate::types::{AutoScalingGroupName, InstanceId, TargetGroupRef};
use aws_sdk_autoscaling::types::{AutoScalingInstanceDetails, LoadBalancerTargetGroupState};
use aws_sdk_autoscaling::Client as AutoScalingClient;
use std::future::Future;

pub struct AwsAutoScalingClient {
    client: AutoScalingClient,
}

impl AwsAutoScalingClient {
    pub fn new(client: AutoScalingClient) -> Self {
        Self { client }
    }

    /// Describe the scaling group membership of a single instance
    pub async fn describe_auto_scaling_instances(
        &self,
        instance_id: &InstanceId,
    ) -> AwsResult<Vec<AutoScalingGroupName>> {
        let response = self
            .client
            .describe_auto_scaling_instances()
            .instance_ids(instance_id.as_str())
            .send()
            .await
            .map_err(|e| {
                AwsError::AutoScalingError(format!(
                    "Failed to describe Auto Scaling instance '{instance_id}': {e:?}"
                ))
            })?;

        group_names(response.auto_scaling_instances())
    }

    /// List every target group attached to a scaling group, following `NextToken`
    pub async fn describe_load_balancer_target_groups(
        &self,
        group: &AutoScalingGroupName,
    ) -> AwsResult<Vec<TargetGroupRef>> {
        collect_pages(|next_token| async move {
            let response = self
                .client
                .describe_load_balancer_target_groups()
                .auto_scaling_group_name(group.as_str())
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| {
                    AwsError::AutoScalingError(format!(
                        "Failed to describe target groups of '{group}': {e:?}"
                    ))
                })?;

            let page = target_group_refs(response.load_balancer_target_groups())?;
            Ok((page, response.next_token().map(str::to_string)))
        })
        .await
    }
}

/// Drain a `NextToken` paginated listing. `fetch` receives the token for the
/// page to load and returns that page plus the token for the next one.
async fn collect_pages<T, F, Fut>(mut fetch: F) -> AwsResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = AwsResult<(Vec<T>, Option<String>)>>,
{
    let mut items = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let (page, token) = fetch(next_token.take()).await?;
        items.extend(page);

        match token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(items)
}

fn group_names(records: &[AutoScalingInstanceDetails]) -> AwsResult<Vec<AutoScalingGroupName>> {
    records
        .iter()
        .map(|record| {
            record
                .auto_scaling_group_name()
                .map(AutoScalingGroupName::new)
                .ok_or_else(|| {
                    AwsError::SdkError(
                        "Membership record is missing its AutoScalingGroupName".to_string(),
                    )
                })
        })
        .collect()
}

fn target_group_refs(states: &[LoadBalancerTargetGroupState]) -> AwsResult<Vec<TargetGroupRef>> {
    states
        .iter()
        .map(|state| {
            state
                .load_balancer_target_group_arn()
                .map(TargetGroupRef::new)
                .ok_or_else(|| {
                    AwsError::SdkError("Target group attachment is missing its ARN".to_string())
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names_empty() {
        assert!(group_names(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_group_names_from_records() {
        let records = vec![AutoScalingInstanceDetails::builder()
            .instance_id("i-1")
            .auto_scaling_group_name("asg-a")
            .build()];
        assert_eq!(
            group_names(&records).unwrap(),
            vec![AutoScalingGroupName::new("asg-a")]
        );
    }

    #[test]
    fn test_group_names_missing_name_is_error() {
        let records = vec![AutoScalingInstanceDetails::builder()
            .instance_id("i-1")
            .build()];
        assert!(matches!(group_names(&records), Err(AwsError::SdkError(_))));
    }

    #[tokio::test]
    async fn test_collect_pages_follows_next_token() {
        let mut requested = Vec::new();
        let items = collect_pages(|token| {
            requested.push(token.clone());
            let page = match token.as_deref() {
                None => (vec!["tg-1", "tg-2"], Some("page-2".to_string())),
                Some("page-2") => (vec!["tg-3"], Some("page-3".to_string())),
                Some(_) => (vec!["tg-4"], None),
            };
            async move { Ok(page) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec!["tg-1", "tg-2", "tg-3", "tg-4"]);
        assert_eq!(
            requested,
            vec![None, Some("page-2".to_string()), Some("page-3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_collect_pages_stops_on_empty_token() {
        let mut calls = 0;
        let items = collect_pages(|_| {
            calls += 1;
            async { Ok((vec![1, 2], Some(String::new()))) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_collect_pages_propagates_error() {
        let mut calls = 0;
        let result: AwsResult<Vec<u8>> = collect_pages(|token| {
            calls += 1;
            async move {
                match token {
                    None => Ok((vec![1], Some("page-2".to_string()))),
                    Some(_) => Err(AwsError::AutoScalingError("Throttling".to_string())),
                }
            }
        })
        .await;

        assert!(matches!(result, Err(AwsError::AutoScalingError(_))));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_target_group_refs_missing_arn_is_error() {
        let states = vec![LoadBalancerTargetGroupState::builder().state("Added").build()];
        assert!(matches!(
            target_group_refs(&states),
            Err(AwsError::SdkError(_))
        ));
    }

    #[test]
    fn test_target_group_refs_keep_order() {
        let states = vec![
            LoadBalancerTargetGroupState::builder()
                .load_balancer_target_group_arn("arn:x:targetgroup/tg-2/b")
                .state("InService")
                .build(),
            LoadBalancerTargetGroupState::builder()
                .load_balancer_target_group_arn("arn:x:targetgroup/tg-1/a")
                .state("Added")
                .build(),
        ];
        let refs = target_group_refs(&states).unwrap();
        assert_eq!(refs[0].name(), "tg-2/b");
        assert_eq!(refs[1].name(), "tg-1/a");
    }
}
