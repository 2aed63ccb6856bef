//! Parsed deployment manifest.
//!
//! The types mirror the manifest document closely enough that a parser can
//! deserialize straight into them; keys the model does not interpret are kept
//! in [`RemainingFields`](crate::RemainingFields) and survive every transform.
use serde::{Deserialize, Serialize};

mod application;
pub use application::{Application, Docker};

mod process;
pub use process::Process;

/// Declarative description of one or more applications to push.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Applications in declaration order.
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Manifest {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    /// Returns `true` if the manifest declares more than one application.
    #[inline]
    pub fn has_multiple_applications(&self) -> bool {
        self.applications.len() > 1
    }
}
