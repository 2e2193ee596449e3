use std::fmt;

use serde::{Deserialize, Serialize};

/// A dependency declaration in a `Build.toml` configuration.
///
/// Supports both shorthand (`"group:name:version"`) and detailed forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    Short(String),
    Detailed(DetailedDependency),
}

/// A dependency with explicit group, name, and version fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedDependency {
    #[serde(default)]
    pub group: Option<String>,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl Dependency {
    /// Resolve this declaration to its coordinate view.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Short(s) => Coordinate::parse(s),
            Self::Detailed(d) => Coordinate {
                group: d.group.clone(),
                name: d.name.clone(),
                version: d.version.clone(),
            },
        }
    }
}

/// Read-only view of a declared dependency: group, name, version.
///
/// Group and version are optional — `"name"` and `"group:name"` are valid
/// shorthand declarations for dependencies pinned elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
}

impl Coordinate {
    /// Parse `"name"`, `"group:name"`, or `"group:name:version"`.
    ///
    /// Empty segments resolve to `None`; extra segments are folded into the
    /// version (classifier suffixes are not vergo's concern).
    pub fn parse(s: &str) -> Self {
        let mut parts = s.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Self {
                group: None,
                name: first.to_string(),
                version: None,
            },
            (Some(name), version) => Self {
                group: non_empty(first),
                name: name.to_string(),
                version: version.and_then(non_empty),
            },
        }
    }

    /// Returns `true` if the declared version pins a snapshot, or pins
    /// nothing at all.
    ///
    /// An absent version is unresolvable at validation time and therefore
    /// treated as snapshot-like.
    pub fn is_snapshot_like(&self) -> bool {
        match self.version.as_deref() {
            None => true,
            Some(v) => is_snapshot_shaped(v),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref group) = self.group {
            write!(f, "{group}:")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(ref version) = self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

fn non_empty(s: impl AsRef<str>) -> Option<String> {
    let s = s.as_ref();
    (!s.is_empty()).then(|| s.to_string())
}

/// Returns `true` if a version string has the shape of a snapshot artifact.
///
/// Snapshot shapes: a trailing `+` (dynamic "latest" selector), the literal
/// suffix `-SNAPSHOT`, or a trailing `-<digits>` build-number suffix.
pub fn is_snapshot_shaped(version: &str) -> bool {
    if version.ends_with('+') || version.ends_with("-SNAPSHOT") {
        return true;
    }
    match version.rsplit_once('-') {
        Some((_, suffix)) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
