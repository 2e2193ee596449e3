//! Release policy constants and their `[versioning]` overrides.

use crate::manifest::VersioningConfig;

/// Dependency configurations that feed compilation or the runtime, and so
/// are guarded on release builds.
pub const GUARDED_CONFIGURATIONS: &[&str] = &[
    "api",
    "compileOnly",
    "compileOnlyApi",
    "implementation",
    "runtimeOnly",
];

/// Group identifiers of internal-organization artifacts.
pub const INTERNAL_GROUPS: &[&str] = &["com.vergo", "org.vergo"];

/// The resolved release policy for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePolicy {
    pub internal_groups: Vec<String>,
    pub configurations: Vec<String>,
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        Self {
            internal_groups: INTERNAL_GROUPS.iter().map(|s| s.to_string()).collect(),
            configurations: GUARDED_CONFIGURATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ReleasePolicy {
    /// Build the policy from an optional `[versioning]` manifest section.
    pub fn from_config(config: Option<&VersioningConfig>) -> Self {
        let defaults = Self::default();
        match config {
            None => defaults,
            Some(cfg) => Self {
                internal_groups: cfg
                    .internal_groups
                    .clone()
                    .unwrap_or(defaults.internal_groups),
                configurations: cfg.configurations.clone().unwrap_or(defaults.configurations),
            },
        }
    }

    /// Returns `true` if `group` identifies an internal-organization artifact.
    pub fn is_internal(&self, group: &str) -> bool {
        self.internal_groups.iter().any(|g| g == group)
    }

    /// Returns `true` if the named configuration is guarded on release builds.
    pub fn is_guarded(&self, configuration: &str) -> bool {
        self.configurations.iter().any(|c| c == configuration)
    }
}
