use serde::{Deserialize, Serialize};

use crate::{HealthCheckType, PROCESS_TYPE_WEB, RemainingFields};

/// Named workload unit of an application.
///
/// Every optional field left as `None` inherits the application-level value.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "type")]
    pub process_type: String,
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
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub health_check_timeout: Option<u64>,
    #[serde(flatten)]
    pub remaining: RemainingFields,
}

impl Process {
    /// Process of the given type with every field unset.
    pub fn of_type(process_type: impl Into<String>) -> Self {
        Self {
            process_type: process_type.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_web(&self) -> bool {
        self.process_type == PROCESS_TYPE_WEB
    }
}
