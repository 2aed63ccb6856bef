use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DeploymentStrategy, HealthCheckType, domain::serde_helpers::empty_as_none};

/// Values supplied on the command line that take precedence over the manifest.
///
/// Every field is optional: `None` means the user did not ask to override it.
/// String fields treat `""` as `None` when deserialized.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlagOverrides {
    pub instances: Option<u32>,
    #[serde(deserialize_with = "empty_as_none")]
    pub memory: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub disk: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub log_rate_limit: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub start_command: Option<String>,
    pub health_check_type: Option<HealthCheckType>,
    #[serde(deserialize_with = "empty_as_none")]
    pub health_check_endpoint: Option<String>,
    /// Health check timeout in seconds.
    pub health_check_timeout: Option<u64>,

    /// Rollout mechanism; read-only for override handlers.
    pub strategy: DeploymentStrategy,
    /// Maximum number of instances replaced at once by a deployment.
    pub max_in_flight: Option<u32>,
    /// Canary instance weights, only honored for canary deployments.
    pub instance_steps: Vec<u32>,

    pub droplet_path: Option<PathBuf>,
    pub no_start: bool,
    pub no_wait: bool,
    pub task: bool,
}

impl FlagOverrides {
    /// Builder-style helper for the deployment strategy.
    pub fn with_strategy(mut self, strategy: DeploymentStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
