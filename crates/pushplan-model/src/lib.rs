mod domain;
pub use domain::{PROCESS_TYPE_WEB, RemainingFields};

mod error;
pub use error::{ModelError, ModelResult};

mod manifest;
pub use manifest::{Application, Docker, Manifest, Process};

mod overrides;
pub use overrides::FlagOverrides;

mod plan;
pub use plan::{PushPlan, Resource};

mod strategy;
pub use strategy::{DeploymentStrategy, HealthCheckType};
