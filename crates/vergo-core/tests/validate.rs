use std::collections::BTreeMap;
use std::path::PathBuf;

use vergo_core::dependency::Dependency;
use vergo_core::policy::ReleasePolicy;
use vergo_core::project::{Project, ProjectModel};
use vergo_core::validate::{check_release_dependencies, check_version_types, validate};
use vergo_core::version::{BuildType, ProjectVersion, VersionDecl};
use vergo_util::errors::VergoError;

fn project(name: &str, version: Option<VersionDecl>) -> Project {
    let root_dir = PathBuf::from("/workspace").join(name);
    Project {
        name: name.to_string(),
        build_file: root_dir.join("Build.toml"),
        root_dir,
        version,
        configurations: BTreeMap::new(),
    }
}

fn structured(version: &str, build_type: BuildType) -> Option<VersionDecl> {
    Some(VersionDecl::Structured(
        ProjectVersion::parse(version, build_type).unwrap(),
    ))
}

fn model(root: Project, members: Vec<Project>) -> ProjectModel {
    ProjectModel {
        root,
        members,
        policy: ReleasePolicy::default(),
    }
}

fn with_dependency(mut project: Project, configuration: &str, dep: &str) -> Project {
    project
        .configurations
        .entry(configuration.to_string())
        .or_default()
        .push(Dependency::Short(dep.to_string()));
    project
}

// ---------------------------------------------------------------------------
// Version type guard
// ---------------------------------------------------------------------------

#[test]
fn guard_accepts_structured_versions() {
    let m = model(
        project("root", structured("1.2.3", BuildType::Snapshot)),
        vec![project("member", None)],
    );
    assert!(check_version_types(&m).is_ok());
}

#[test]
fn guard_rejects_plain_string_version() {
    let m = model(
        project("root", Some(VersionDecl::Plain("1.2.3".to_string()))),
        vec![],
    );
    let err = check_version_types(&m).unwrap_err();
    assert!(matches!(err, VergoError::VersionType { ref project } if project == "root"));
    assert!(err
        .to_string()
        .contains("Version is not an instance of vergo_core::version::ProjectVersion"));
}

#[test]
fn guard_rejects_missing_version() {
    let m = model(project("root", None), vec![]);
    assert!(check_version_types(&m).is_err());
}

#[test]
fn guard_rejects_plain_member_version() {
    let m = model(
        project("root", structured("1.2.3", BuildType::Snapshot)),
        vec![project("member", Some(VersionDecl::Plain("2".to_string())))],
    );
    let err = check_version_types(&m).unwrap_err();
    assert!(matches!(err, VergoError::VersionType { ref project } if project == "member"));
}

#[test]
fn guard_exempts_build_src() {
    let m = model(
        project("root", structured("1.2.3", BuildType::Snapshot)),
        vec![project(
            "buildSrc",
            Some(VersionDecl::Plain("unspecified".to_string())),
        )],
    );
    assert!(check_version_types(&m).is_ok());
}

// ---------------------------------------------------------------------------
// Release dependency validator
// ---------------------------------------------------------------------------

#[test]
fn release_rejects_dynamic_internal_dependency() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "implementation",
        "org.vergo:versionparser:4.+",
    );
    let err = check_release_dependencies(&model(root, vec![])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Release build depends on snapshot artifact org.vergo:versionparser:4.+ (implementation)"
    );
}

#[test]
fn release_rejects_snapshot_suffix_dependency() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "api",
        "com.vergo:util:2.0.0-SNAPSHOT",
    );
    let err = check_release_dependencies(&model(root, vec![])).unwrap_err();
    assert!(matches!(
        err,
        VergoError::SnapshotDependency { ref configuration, .. } if configuration == "api"
    ));
}

#[test]
fn release_rejects_unpinned_internal_dependency() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "runtimeOnly",
        "org.vergo:agent",
    );
    let err = check_release_dependencies(&model(root, vec![])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Release build depends on snapshot artifact org.vergo:agent (runtimeOnly)"
    );
}

#[test]
fn release_rejects_member_violation() {
    let member = with_dependency(
        project("member", None),
        "compileOnly",
        "org.vergo:annotations:1.+",
    );
    let root = project("root", structured("1.2.3", BuildType::Release));
    assert!(check_release_dependencies(&model(root, vec![member])).is_err());
}

#[test]
fn release_accepts_pinned_internal_dependencies() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "implementation",
        "org.vergo:versionparser:4.1.0",
    );
    assert!(check_release_dependencies(&model(root, vec![])).is_ok());
}

#[test]
fn release_ignores_external_groups() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "implementation",
        "com.example:commons-io:2.+",
    );
    assert!(check_release_dependencies(&model(root, vec![])).is_ok());
}

#[test]
fn release_ignores_unguarded_configurations() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "testImplementation",
        "org.vergo:test-fixtures:1.+",
    );
    assert!(check_release_dependencies(&model(root, vec![])).is_ok());
}

#[test]
fn snapshot_build_skips_dependency_validation() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Snapshot)),
        "implementation",
        "org.vergo:versionparser:4.+",
    );
    assert!(check_release_dependencies(&model(root, vec![])).is_ok());
}

#[test]
fn custom_policy_changes_internal_groups() {
    let root = with_dependency(
        project("root", structured("1.2.3", BuildType::Release)),
        "implementation",
        "com.acme:widget:1.+",
    );
    let mut m = model(root, vec![]);
    assert!(check_release_dependencies(&m).is_ok());

    m.policy = ReleasePolicy {
        internal_groups: vec!["com.acme".to_string()],
        configurations: vec!["implementation".to_string()],
    };
    assert!(check_release_dependencies(&m).is_err());
}

// ---------------------------------------------------------------------------
// Combined entry point
// ---------------------------------------------------------------------------

#[test]
fn validate_runs_type_guard_before_dependency_check() {
    // A plain root version must surface as the type violation even when a
    // snapshot dependency is also present.
    let root = with_dependency(
        project("root", Some(VersionDecl::Plain("1.2.3".to_string()))),
        "implementation",
        "org.vergo:versionparser:4.+",
    );
    let err = validate(&model(root, vec![])).unwrap_err();
    assert!(matches!(err, VergoError::VersionType { .. }));
}

#[test]
fn validate_passes_clean_release_model() {
    let member = with_dependency(
        project("member", None),
        "implementation",
        "org.vergo:versionparser:4.1.0",
    );
    let root = project("root", structured("1.2.3", BuildType::Release));
    assert!(validate(&model(root, vec![member])).is_ok());
}
