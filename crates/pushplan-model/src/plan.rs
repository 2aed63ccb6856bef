use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::DeploymentStrategy;

/// A file entry gathered from the bits path for upload matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Path relative to the bits root.
    pub filename: String,
    /// Content digest, hex encoded.
    pub checksum: String,
    pub size_in_bytes: u64,
    /// Unix permission bits.
    pub mode: u32,
}

/// In-progress state of a push for one application.
///
/// Built by the preparation sequence; manifest override resolution is a
/// separate stage whose output is submitted alongside this plan.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PushPlan {
    pub app_name: String,
    pub bits_path: Option<PathBuf>,
    pub droplet_path: Option<PathBuf>,
    pub docker_image: Option<String>,
    pub all_resources: Vec<Resource>,
    /// `true` when `bits_path` points at an archive instead of a directory.
    pub archive: bool,

    pub strategy: DeploymentStrategy,
    pub max_in_flight: Option<u32>,
    pub instance_steps: Vec<u32>,

    pub no_start: bool,
    pub no_wait: bool,
    pub task_type_application: bool,
}

impl PushPlan {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Returns `true` if the app is pushed from a docker image.
    #[inline]
    pub fn is_docker(&self) -> bool {
        self.docker_image.is_some()
    }
}
