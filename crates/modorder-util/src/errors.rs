use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modorder operations.
///
/// Only I/O and file-format problems end up here. Data-quality issues found
/// while ordering mods (missing dependencies, cycles) are reported as
/// diagnostics by the resolver and never become errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ModorderError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The mod metadata file is missing or malformed.
    #[error("Metadata error: {message}")]
    #[diagnostic(help("Check that the mods file is a JSON array of mod objects"))]
    Metadata { message: String },

    /// The persisted load order file could not be read or written.
    #[error("Order file error: {message}")]
    #[diagnostic(help("The order file must be a JSON object with an \"order\" array of mod ids"))]
    OrderFile { message: String },

    /// Invalid global configuration.
    #[error("Config error: {message}")]
    Config { message: String },

    /// The current load order has problems the user asked to fail on.
    #[error("Load order check failed: {message}")]
    #[diagnostic(help("Run `modorder resolve --write` to apply the recommended order"))]
    Resolution { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ModorderResult<T> = miette::Result<T>;
