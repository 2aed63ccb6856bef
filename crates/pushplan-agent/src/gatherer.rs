use std::{fs, path::Path};

use pushplan_core::{CoreError, CoreResult, prepare::ResourceGatherer};
use pushplan_model::Resource;
use walkdir::WalkDir;

/// Lists the files under the bits path without digesting them.
///
/// Checksums are left empty; the uploader computes them when matching.
#[derive(Debug, Default)]
pub struct ListingGatherer;

impl ResourceGatherer for ListingGatherer {
    fn gather_directory_resources(&self, path: &Path) -> CoreResult<Vec<Resource>> {
        let mut out = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| CoreError::Resources(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let meta = entry
                .metadata()
                .map_err(|e| CoreError::Resources(e.to_string()))?;

            let filename = entry
                .path()
                .strip_prefix(path)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            out.push(Resource {
                filename,
                checksum: String::new(),
                size_in_bytes: meta.len(),
                mode: file_mode(&meta),
            });
        }
        Ok(out)
    }

    fn gather_archive_resources(&self, path: &Path) -> CoreResult<Vec<Resource>> {
        Err(CoreError::Resources(format!(
            "archive bits are not supported: {}",
            path.display()
        )))
    }
}

#[cfg(unix)]
fn file_mode(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn file_mode(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o644 }
}
