use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use vergo_util::errors::VergoError;

use crate::dependency::Dependency;
use crate::version::VersionDecl;

/// Name of the per-project build manifest file.
pub const BUILD_MANIFEST: &str = "Build.toml";

/// The parsed representation of a `Build.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub workspace: Option<WorkspaceConfig>,

    #[serde(default)]
    pub configurations: BTreeMap<String, Vec<Dependency>>,

    #[serde(default)]
    pub versioning: Option<VersioningConfig>,
}

/// Project identity and version from the `[project]` section.
///
/// `version` is optional for workspace members, which inherit the root
/// project's version when they declare none of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<VersionDecl>,
}

/// Workspace configuration from the `[workspace]` section (root only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub members: Vec<String>,
}

/// Policy overrides from the `[versioning]` section (root only).
///
/// Absent fields fall back to the built-in defaults in
/// [`crate::policy::ReleasePolicy`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersioningConfig {
    #[serde(default, rename = "internal-groups")]
    pub internal_groups: Option<Vec<String>>,
    #[serde(default)]
    pub configurations: Option<Vec<String>>,
}

impl Manifest {
    /// Load and parse a `Build.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VergoError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content).map_err(|e| {
            VergoError::Manifest {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse a `Build.toml` from a string.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
