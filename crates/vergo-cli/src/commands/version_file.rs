//! `projectVersionFile` task handler.

use miette::Result;
use vergo_core::project::ProjectModel;
use vergo_ops::ops_version_file::{self, WriteOutcome};
use vergo_util::progress;

pub fn exec(model: &ProjectModel) -> Result<()> {
    match ops_version_file::write_version_file(model)? {
        WriteOutcome::Written(path) => {
            progress::status("Wrote", &display_path(model, &path));
        }
        WriteOutcome::UpToDate(path) => {
            progress::status_info("Up-to-date", &display_path(model, &path));
        }
    }
    Ok(())
}

fn display_path(model: &ProjectModel, path: &std::path::Path) -> String {
    path.strip_prefix(&model.root.root_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
