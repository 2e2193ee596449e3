//! Task dispatch and handler modules.
//!
//! Every invocation runs the configuration phase (model load, version type
//! guard, release dependency validator) before any task action executes.

mod clean;
mod tasks;
mod version;
mod version_file;

use miette::Result;

use vergo_core::manifest::BUILD_MANIFEST;
use vergo_core::project::ProjectModel;
use vergo_ops::ops_schedule;
use vergo_ops::ops_tasks::{
    CLEAN_TASK_NAME, TASKS_TASK_NAME, VERSION_FILE_TASK_NAME, VERSION_TASK_NAME,
};
use vergo_util::errors::VergoError;

use crate::cli::Cli;

/// Run the configuration phase, then execute the planned tasks in order.
pub fn dispatch(cli: Cli) -> Result<()> {
    let start_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(VergoError::Io)?,
    };
    let root_dir = vergo_util::fs::find_ancestor_with(&start_dir, BUILD_MANIFEST).ok_or_else(
        || VergoError::Generic {
            message: format!("No {BUILD_MANIFEST} found in this directory or any parent"),
        },
    )?;

    let model = ProjectModel::load(&root_dir)?;
    vergo_core::validate::validate(&model)?;
    if cli.verbose {
        vergo_util::progress::status_info(
            "Configured",
            &format!("{} ({} projects)", model.root.name, model.all_projects().count()),
        );
    }

    let plan = ops_schedule::plan(&cli.tasks)?;
    for task in plan {
        match task {
            VERSION_TASK_NAME => version::exec(&model)?,
            VERSION_FILE_TASK_NAME => version_file::exec(&model)?,
            CLEAN_TASK_NAME => clean::exec(&root_dir)?,
            TASKS_TASK_NAME => tasks::exec(),
            other => {
                return Err(VergoError::UnknownTask {
                    name: other.to_string(),
                }
                .into())
            }
        }
    }
    Ok(())
}
