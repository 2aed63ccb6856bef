use std::path::Path;

use pushplan_model::Resource;

use crate::error::CoreResult;

/// Collects the file resources of the app bits for upload matching.
///
/// Digesting files is outside this crate; callers plug in their own
/// implementation.
pub trait ResourceGatherer: Send + Sync {
    /// Resources of an unpacked directory.
    fn gather_directory_resources(&self, path: &Path) -> CoreResult<Vec<Resource>>;

    /// Resources contained in a zip/jar/war archive.
    fn gather_archive_resources(&self, path: &Path) -> CoreResult<Vec<Resource>>;
}
