//! Task: remove build outputs and stored fingerprints.

use std::path::Path;

use vergo_util::errors::VergoError;

/// Remove the `build/` directory and the stored fingerprints from the
/// project so the next invocation starts fresh.
pub fn clean(project_dir: &Path) -> miette::Result<CleanResult> {
    let build_dir = project_dir.join("build");

    if build_dir.exists() {
        std::fs::remove_dir_all(&build_dir).map_err(VergoError::Io)?;
        remove_if_exists(&project_dir.join(".vergo").join("fingerprints"));
        Ok(CleanResult::Cleaned)
    } else {
        Ok(CleanResult::NothingToClean)
    }
}

fn remove_if_exists(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_dir_all(path) {
            tracing::warn!("Failed to remove directory {}: {e}", path.display());
        }
    }
}

/// Result of a clean operation.
pub enum CleanResult {
    Cleaned,
    NothingToClean,
}
