//! Execution planning for a requested task list.
//!
//! Plan rules:
//! - unknown task names fail the invocation;
//! - duplicate requests collapse to the first occurrence;
//! - `projectVersionFile` is injected into every plan that is not
//!   clean-only (an empty request means default tasks, which is not
//!   clean-only);
//! - `projectVersionFile` runs after `clean` when both are planned.

use vergo_util::errors::VergoError;

use crate::ops_tasks::{find_task, CLEAN_TASK_NAME, VERSION_FILE_TASK_NAME};

/// Returns `true` if the requested task list is exactly "clean", possibly
/// repeated. An empty list implies default tasks and is not clean-only.
pub fn is_clean_only(requested: &[String]) -> bool {
    !requested.is_empty() && requested.iter().all(|name| name == CLEAN_TASK_NAME)
}

/// Turn the requested task list into the ordered execution plan.
pub fn plan(requested: &[String]) -> Result<Vec<&'static str>, VergoError> {
    let mut planned: Vec<&'static str> = Vec::new();
    for name in requested {
        let task = find_task(name).ok_or_else(|| VergoError::UnknownTask {
            name: name.clone(),
        })?;
        if !planned.contains(&task.name) {
            planned.push(task.name);
        }
    }

    if !is_clean_only(requested) && !planned.contains(&VERSION_FILE_TASK_NAME) {
        planned.push(VERSION_FILE_TASK_NAME);
    }

    // Must-run-after: reposition the version file write behind clean.
    let version_file_pos = planned.iter().position(|n| *n == VERSION_FILE_TASK_NAME);
    let clean_pos = planned.iter().position(|n| *n == CLEAN_TASK_NAME);
    if let (Some(vf), Some(clean)) = (version_file_pos, clean_pos) {
        if vf < clean {
            planned.remove(vf);
            planned.insert(clean, VERSION_FILE_TASK_NAME);
        }
    }

    tracing::debug!(?planned, "execution plan");
    Ok(planned)
}
