use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Rollout mechanism requested for a push.
///
/// Strategies:
/// - `Default`: no deployment; the push updates the app in place.
/// - `Rolling`: instances are replaced in batches by a deployment.
/// - `Canary`: a canary instance is deployed first, then the rest in steps.
///
/// Some overrides are only meaningful while a deployment is active; see
/// [`DeploymentStrategy::is_active`].
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeploymentStrategy {
    /// No deployment strategy was requested.
    #[default]
    Default,
    /// Rolling deployment.
    Rolling,
    /// Canary deployment.
    Canary,
}

impl DeploymentStrategy {
    /// Returns `true` for every strategy that creates a deployment.
    #[inline]
    pub const fn is_active(&self) -> bool {
        !matches!(self, DeploymentStrategy::Default)
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeploymentStrategy::Default => "default",
            DeploymentStrategy::Rolling => "rolling",
            DeploymentStrategy::Canary => "canary",
        }
    }
}

impl FromStr for DeploymentStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "default" => Ok(DeploymentStrategy::Default),
            "rolling" => Ok(DeploymentStrategy::Rolling),
            "canary" => Ok(DeploymentStrategy::Canary),
            other => Err(ModelError::UnknownDeploymentStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for DeploymentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeploymentStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeploymentStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
