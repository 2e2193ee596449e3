use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all vergo operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VergoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed build manifest (e.g. Build.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Build.toml for syntax errors"))]
    Manifest { message: String },

    /// The project version is a bare string rather than a structured value.
    #[error("Version is not an instance of vergo_core::version::ProjectVersion")]
    #[diagnostic(help(
        "Project '{project}' must declare version = {{ version = \"1.2.3\", build-type = \"snapshot\" }}"
    ))]
    VersionType { project: String },

    /// A release build declares an unpinned or snapshot internal dependency.
    #[error("Release build depends on snapshot artifact {artifact} ({configuration})")]
    #[diagnostic(help("Pin the dependency to a released version before building a release"))]
    SnapshotDependency {
        artifact: String,
        configuration: String,
    },

    /// A requested task name is not registered.
    #[error("Task '{name}' not found in root project")]
    #[diagnostic(help("Run `vergo tasks` to list the available tasks"))]
    UnknownTask { name: String },

    /// A scheduled task failed while executing its action.
    #[error("Task '{task}' failed")]
    TaskFailed {
        task: String,
        #[source]
        cause: std::io::Error,
    },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type VergoResult<T> = miette::Result<T>;
