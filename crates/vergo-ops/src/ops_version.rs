//! Task: display the project version.

use vergo_core::project::ProjectModel;

/// Print the invoked project's resolved version to stdout.
///
/// Always runs; never up-to-date-skipped. The version type guard has
/// already rejected malformed versions by the time this task executes.
pub fn version(model: &ProjectModel) -> miette::Result<()> {
    let version = model.resolved_version()?;
    println!("{version}");
    Ok(())
}
