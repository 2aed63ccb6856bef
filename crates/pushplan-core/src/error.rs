use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An override was supplied but the manifest has several applications,
    /// so there is no single target for it.
    #[error("flag {flag} cannot be used with a manifest containing multiple applications")]
    AmbiguousApplicationTarget { flag: &'static str },

    #[error("bits path must be set before gathering app resources")]
    BitsPathNotSet,

    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    #[error("cannot inspect bits path {path:?}: {source}")]
    BitsPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("resource gathering failed: {0}")]
    Resources(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
