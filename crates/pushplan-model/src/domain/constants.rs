//! Common model-level constants.

/// Process type that receives routed traffic.
///
/// Command-line overrides target the process with this type when it is present
/// in the manifest; every other process type is treated as "non-web".
pub const PROCESS_TYPE_WEB: &str = "web";
