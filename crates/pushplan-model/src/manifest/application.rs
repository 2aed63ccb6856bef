use serde::{Deserialize, Serialize};

use crate::{HealthCheckType, RemainingFields, manifest::Process};

/// One application entry of a manifest.
///
/// Application-level values act as defaults for every process that does not
/// declare its own.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_quota: Option<String>,
    #[serde(
        rename = "log-rate-limit-per-second",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_rate_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(rename = "health-check-type", skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<HealthCheckType>,
    #[serde(
        rename = "health-check-http-endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_http_endpoint: Option<String>,
    /// Health check timeout in seconds.
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub health_check_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<Docker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processes: Vec<Process>,
    #[serde(flatten)]
    pub remaining: RemainingFields,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First process of type `web`, if the application declares one.
    pub fn web_process_mut(&mut self) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.is_web())
    }

    /// Docker image reference, when the app is pushed from an image.
    pub fn docker_image(&self) -> Option<&str> {
        self.docker.as_ref().map(|d| d.image.as_str())
    }
}

/// Docker image source of an application.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docker {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
