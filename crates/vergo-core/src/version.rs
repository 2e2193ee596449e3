//! Structured project versions and their manifest declarations.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

/// Classification of a build: snapshot (development) or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Snapshot,
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Release => write!(f, "release"),
        }
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snapshot" => Ok(Self::Snapshot),
            "release" => Ok(Self::Release),
            other => Err(format!("unknown build type '{other}'")),
        }
    }
}

/// A project version: a semantic version paired with a build type.
///
/// Declared in `Build.toml` as
/// `version = { version = "1.2.3", build-type = "snapshot" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectVersion {
    version: Version,
    #[serde(rename = "build-type")]
    build_type: BuildType,
}

impl ProjectVersion {
    pub fn new(version: Version, build_type: BuildType) -> Self {
        Self {
            version,
            build_type,
        }
    }

    /// Parse a `ProjectVersion` from a semantic version string.
    pub fn parse(version: &str, build_type: BuildType) -> Result<Self, semver::Error> {
        Version::parse(version).map(|v| Self::new(v, build_type))
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    /// Returns `true` if this version classifies the build as a release.
    pub fn is_release_build(&self) -> bool {
        self.build_type == BuildType::Release
    }

    /// Returns `true` if this version classifies the build as a snapshot.
    pub fn is_snapshot_build(&self) -> bool {
        self.build_type == BuildType::Snapshot
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// A version declaration as it appears in a build manifest.
///
/// `Structured` is the table form vergo requires; `Plain` is a bare string,
/// accepted by the parser and failed by the version type guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionDecl {
    Structured(ProjectVersion),
    Plain(String),
}

impl VersionDecl {
    /// Returns the structured version, or `None` for a bare string.
    pub fn as_structured(&self) -> Option<&ProjectVersion> {
        match self {
            Self::Structured(v) => Some(v),
            Self::Plain(_) => None,
        }
    }
}
