use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown deployment strategy: {0}")]
    UnknownDeploymentStrategy(String),

    #[error("unknown health check type: {0}")]
    UnknownHealthCheckType(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
