//! Error handling for the themesmith application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by the configuration store, the model library, the file
/// layer and the builders.
///
/// Every variant is fatal to the command that raised it. A write declined
/// because of the overwrite policy is not an error; it is reported through
/// [`crate::materialize::WriteResult::written`].
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration path is absent or null.
    #[error("{message}")]
    ConfigMissing { path: String, message: String },

    /// A required configuration path holds an empty string or a value of the wrong kind.
    #[error("{message}")]
    ConfigInvalid { path: String, message: String },

    /// An append targeted a path that holds something other than an array.
    #[error("Configuration error: cannot append to '{path}', it holds a {found} instead of an array.")]
    ConfigType { path: String, found: ValueKind },

    /// A configuration path could not be constructed.
    #[error("Invalid configuration path: {0}.")]
    InvalidPath(String),

    #[error(
        "No {manifest} found in '{start}' or any of its parent directories. Run themesmith from inside a project."
    )]
    ProjectRootNotFound { start: String, manifest: String },

    /// A model identifier does not resolve to a file of the model library.
    #[error("Template model '{model}' not found in '{location}'.")]
    ModelNotFound { model: String, location: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Invalid glob in the boilerplate ignore rules
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// The terminal interaction failed
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A builder was handed incomplete or inconsistent parameters.
    #[error("Error: {0}.")]
    BuildError(String),
}

/// Convenience type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
