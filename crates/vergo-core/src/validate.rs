//! Configuration-phase validation: the version type guard and the release
//! dependency validator.
//!
//! Both checks run once per invocation, after the model is fully loaded;
//! the first violated invariant aborts the build.

use vergo_util::errors::VergoError;

use crate::project::{Project, ProjectModel};
use crate::version::VersionDecl;

/// Name of the host build tool's meta-build project, exempt from the
/// version type guard.
pub const META_BUILD_PROJECT: &str = "buildSrc";

/// Run both configuration-phase checks, type guard first.
pub fn validate(model: &ProjectModel) -> Result<(), VergoError> {
    check_version_types(model)?;
    check_release_dependencies(model)
}

/// Version type guard: every project's effective version must be a
/// structured [`crate::version::ProjectVersion`], not a bare string.
///
/// A project literally named `buildSrc` is exempt — its version is not
/// user-meaningful.
pub fn check_version_types(model: &ProjectModel) -> Result<(), VergoError> {
    for project in model.all_projects() {
        if project.name == META_BUILD_PROJECT {
            continue;
        }
        match model.effective_version(project) {
            Some(VersionDecl::Structured(_)) => {}
            Some(VersionDecl::Plain(_)) | None => {
                return Err(VergoError::VersionType {
                    project: project.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Release dependency validator: a release build cannot depend on any
/// snapshot internal artifacts for compilation or runtime.
///
/// Walks every project of the model and every guarded configuration,
/// failing on the first internal dependency that is unpinned or pinned to
/// a snapshot-shaped version. Not a release build: no-op.
pub fn check_release_dependencies(model: &ProjectModel) -> Result<(), VergoError> {
    let is_release = model
        .root
        .version
        .as_ref()
        .and_then(VersionDecl::as_structured)
        .is_some_and(|v| v.is_release_build());
    if !is_release {
        return Ok(());
    }

    for project in model.all_projects() {
        check_project_dependencies(model, project)?;
    }
    Ok(())
}

fn check_project_dependencies(model: &ProjectModel, project: &Project) -> Result<(), VergoError> {
    for (configuration, dependencies) in &project.configurations {
        if !model.policy.is_guarded(configuration) {
            continue;
        }
        for dependency in dependencies {
            let coordinate = dependency.coordinate();
            let internal = coordinate
                .group
                .as_deref()
                .is_some_and(|g| model.policy.is_internal(g));
            if internal && coordinate.is_snapshot_like() {
                tracing::error!(
                    project = %project.name,
                    artifact = %coordinate,
                    configuration = %configuration,
                    "release build depends on snapshot artifact"
                );
                return Err(VergoError::SnapshotDependency {
                    artifact: coordinate.to_string(),
                    configuration: configuration.clone(),
                });
            }
        }
    }
    Ok(())
}
