use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// How the platform decides that a process instance is healthy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthCheckType {
    /// A TCP connection to the instance port succeeds.
    Port,
    /// The process is running.
    Process,
    /// An HTTP GET on the configured endpoint returns 200.
    Http,
}

impl HealthCheckType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthCheckType::Port => "port",
            HealthCheckType::Process => "process",
            HealthCheckType::Http => "http",
        }
    }
}

impl FromStr for HealthCheckType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "port" => Ok(HealthCheckType::Port),
            // "none" is the legacy spelling of a process check.
            "process" | "none" => Ok(HealthCheckType::Process),
            "http" => Ok(HealthCheckType::Http),
            other => Err(ModelError::UnknownHealthCheckType(other.to_string())),
        }
    }
}

impl fmt::Display for HealthCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HealthCheckType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthCheckType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
