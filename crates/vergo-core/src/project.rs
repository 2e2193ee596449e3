use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vergo_util::errors::VergoError;

use crate::dependency::Dependency;
use crate::manifest::{Manifest, BUILD_MANIFEST};
use crate::policy::ReleasePolicy;
use crate::version::{ProjectVersion, VersionDecl};

/// One project of the build: its manifest data plus filesystem locations.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub root_dir: PathBuf,
    pub build_file: PathBuf,
    pub version: Option<VersionDecl>,
    pub configurations: BTreeMap<String, Vec<Dependency>>,
}

impl Project {
    fn from_manifest(manifest: Manifest, root_dir: PathBuf) -> Self {
        Self {
            name: manifest.project.name,
            build_file: root_dir.join(BUILD_MANIFEST),
            root_dir,
            version: manifest.project.version,
            configurations: manifest.configurations,
        }
    }
}

/// The loaded project model: the root project, its members, and the
/// release policy resolved from the root manifest.
#[derive(Debug, Clone)]
pub struct ProjectModel {
    pub root: Project,
    pub members: Vec<Project>,
    pub policy: ReleasePolicy,
}

impl ProjectModel {
    /// Load the model rooted at `root_dir` (the directory containing the
    /// root `Build.toml`). Member directories come from the root
    /// `[workspace]` section; each must carry its own manifest.
    pub fn load(root_dir: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(&root_dir.join(BUILD_MANIFEST))?;
        let policy = ReleasePolicy::from_config(manifest.versioning.as_ref());

        let member_dirs: Vec<PathBuf> = manifest
            .workspace
            .as_ref()
            .map(|ws| ws.members.iter().map(|m| root_dir.join(m)).collect())
            .unwrap_or_default();

        let root = Project::from_manifest(manifest, root_dir.to_path_buf());

        let mut members = Vec::with_capacity(member_dirs.len());
        for dir in member_dirs {
            let member_manifest = Manifest::from_path(&dir.join(BUILD_MANIFEST))?;
            tracing::debug!(member = %member_manifest.project.name, "loaded workspace member");
            members.push(Project::from_manifest(member_manifest, dir));
        }

        Ok(Self {
            root,
            members,
            policy,
        })
    }

    /// All projects of the model: the root first, then the members in
    /// declaration order.
    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        std::iter::once(&self.root).chain(self.members.iter())
    }

    /// The version declaration in effect for `project`: its own, or the
    /// root's when the member declares none.
    pub fn effective_version<'a>(&'a self, project: &'a Project) -> Option<&'a VersionDecl> {
        project.version.as_ref().or(self.root.version.as_ref())
    }

    /// The root project's resolved structured version.
    ///
    /// Errors when the root declares no version or a bare string; callers
    /// run after the version type guard, so this only fires for the guard's
    /// own exemptions (a root literally named `buildSrc`).
    pub fn resolved_version(&self) -> Result<&ProjectVersion, VergoError> {
        match self.root.version.as_ref() {
            Some(VersionDecl::Structured(v)) => Ok(v),
            Some(VersionDecl::Plain(_)) | None => Err(VergoError::VersionType {
                project: self.root.name.clone(),
            }),
        }
    }
}
