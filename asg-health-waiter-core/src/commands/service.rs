//! Health waiter service layer
//!
//! The service holds the provider and the polling policy and exposes the
//! high-level operations (resolve, enumerate, wait) used by the CLI.

use crate::aws::provider::AwsHealthProvider;
use crate::config::WaiterConfig;
use crate::error::HealthWaiterResult;
use crate::provider::HealthProvider;
use crate::waiter::HealthWaiter;

/// Main service struct that holds the provider and the waiter policy
pub struct HealthWaiterService<P: HealthProvider = AwsHealthProvider> {
    pub(crate) provider: P,
    pub(crate) waiter: HealthWaiter,
}

impl HealthWaiterService<AwsHealthProvider> {
    /// Create a new service instance with AWS clients
    ///
    /// The configuration is validated before any client is built. Credentials
    /// and region come from the default provider chain unless `region` is given.
    pub async fn new(config: WaiterConfig, region: Option<String>) -> HealthWaiterResult<Self> {
        let waiter = HealthWaiter::new(config)?;
        let provider = AwsHealthProvider::load(region).await;
        Ok(Self { provider, waiter })
    }
}

impl<P: HealthProvider> HealthWaiterService<P> {
    /// Create a service over any provider implementation
    pub fn with_provider(provider: P, config: WaiterConfig) -> HealthWaiterResult<Self> {
        Ok(Self {
            provider,
            waiter: HealthWaiter::new(config)?,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &WaiterConfig {
        self.waiter.config()
    }

    // resolve_group() and enumerate_target_groups() are in resolve.rs
    // wait_until_healthy() is in wait.rs
}
