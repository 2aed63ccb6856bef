mod deployment;
pub use deployment::DeploymentStrategy;

mod health_check;
pub use health_check::HealthCheckType;
