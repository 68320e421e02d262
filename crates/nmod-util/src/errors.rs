use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all nmod operations.
#[derive(Debug, Error, Diagnostic)]
pub enum NmodError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Nmod.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Nmod.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid property definition passed on the command line.
    #[error("Invalid property definition: {message}")]
    #[diagnostic(help("Properties are passed as -P name=value"))]
    Property { message: String },

    /// The publish action ran with zero registered publication tasks.
    ///
    /// Missing credentials never fail configuration on their own; this is
    /// only raised at the moment publishing is actually invoked.
    #[error("No publishing configurations")]
    #[diagnostic(help(
        "Set the credential properties of at least one publish rule, \
         e.g. -P maven.user=... -P maven.pass=..."
    ))]
    NoPublishingConfigurations,

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type NmodResult<T> = miette::Result<T>;
