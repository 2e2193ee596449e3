//! `version` task handler.

use miette::Result;
use vergo_core::project::ProjectModel;

pub fn exec(model: &ProjectModel) -> Result<()> {
    vergo_ops::ops_version::version(model)
}
