//! Task: write the resolved project version to a build artifact file.
//!
//! The write is incremental: a SHA-256 fingerprint over the task's declared
//! inputs (every project's build manifest, the root-level build files, and
//! the resolved version string) is stored under `.vergo/fingerprints/`.
//! When the stored fingerprint matches and the output file exists, the
//! write is skipped.

use std::path::{Path, PathBuf};

use vergo_core::project::ProjectModel;
use vergo_util::errors::VergoError;
use vergo_util::hash;

use crate::ops_tasks::VERSION_FILE_TASK_NAME;

/// Name of the emitted version file inside the build output directory.
pub const PROJECT_VERSION_FILENAME: &str = "projectversion.txt";

/// Root-level build configuration files that participate in the fingerprint
/// when they exist. Existence-checked and hashed, never parsed.
pub const BUILD_RELATED_FILES: &[&str] = &[
    "build.properties",
    "Settings.toml",
    "settings.kts",
    "versions.toml",
];

/// Outcome of a version-file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written (first run, changed inputs, or missing output).
    Written(PathBuf),
    /// Inputs and output both unchanged; nothing was done.
    UpToDate(PathBuf),
}

/// Write the root project's version to `build/projectversion.txt`.
pub fn write_version_file(model: &ProjectModel) -> miette::Result<WriteOutcome> {
    let version = model.resolved_version()?;
    let root_dir = &model.root.root_dir;
    let output = root_dir.join("build").join(PROJECT_VERSION_FILENAME);

    let fingerprint = compute_fingerprint(model, &version.to_string())?;
    let fp_path = fingerprint_path(root_dir);
    if output.is_file() && load_fingerprint(&fp_path).as_deref() == Some(fingerprint.as_str()) {
        tracing::debug!(output = %output.display(), "version file up to date");
        return Ok(WriteOutcome::UpToDate(output));
    }

    vergo_util::fs::write_text(&output, &version.to_string()).map_err(task_failed)?;
    vergo_util::fs::write_text(&fp_path, &fingerprint).map_err(task_failed)?;

    Ok(WriteOutcome::Written(output))
}

/// The task's input files: every project's build manifest plus the
/// root-level build files that exist.
pub fn input_files(model: &ProjectModel) -> Vec<PathBuf> {
    let mut inputs: Vec<PathBuf> = model
        .all_projects()
        .map(|p| p.build_file.clone())
        .collect();
    for name in BUILD_RELATED_FILES {
        let file = model.root.root_dir.join(name);
        if file.is_file() {
            inputs.push(file);
        }
    }
    inputs
}

/// Hash the input file contents and the resolved version string into one
/// fingerprint. Inputs are sorted by path so the hash is order-stable.
fn compute_fingerprint(model: &ProjectModel, version: &str) -> miette::Result<String> {
    let mut inputs = input_files(model);
    inputs.sort();

    let mut manifest = String::new();
    for input in &inputs {
        let file_hash = hash::sha256_file(input).map_err(|e| VergoError::Generic {
            message: format!("Failed to read task input {}: {e}", input.display()),
        })?;
        manifest.push_str("input:");
        manifest.push_str(&input.to_string_lossy());
        manifest.push(':');
        manifest.push_str(&file_hash);
        manifest.push('\n');
    }
    manifest.push_str("version:");
    manifest.push_str(version);
    manifest.push('\n');

    Ok(hash::sha256_bytes(manifest.as_bytes()))
}

fn fingerprint_path(root_dir: &Path) -> PathBuf {
    root_dir
        .join(".vergo")
        .join("fingerprints")
        .join(PROJECT_VERSION_FILENAME)
}

fn load_fingerprint(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

fn task_failed(cause: std::io::Error) -> VergoError {
    VergoError::TaskFailed {
        task: VERSION_FILE_TASK_NAME.to_string(),
        cause,
    }
}
