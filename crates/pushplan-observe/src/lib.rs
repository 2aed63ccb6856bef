//! Logging setup shared by pushplan binaries.
mod logger;
pub use logger::*;
