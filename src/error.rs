//! Error types for view rendering.
//!
//! This module provides [`ViewsError`], the single error type for all view
//! operations. It abstracts over the underlying template engine's errors so
//! the public API stays stable regardless of the engine backend.

use thiserror::Error;

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewsError>;

/// Errors that can occur while resolving or rendering a view.
#[derive(Debug, Error)]
pub enum ViewsError {
    /// The template engine failed while executing a view.
    ///
    /// Carries the logical view name and the engine's message. This is the
    /// error callers see when a template is malformed or fails mid-render.
    #[error("error rendering view [{view}]: {message}")]
    Rendering {
        /// The logical view name that was being rendered.
        view: String,
        /// The engine's error message.
        message: String,
    },

    /// No template resource exists at the resolved view location.
    ///
    /// Propagated as-is, without view-name wrapping.
    #[error("view not found: {0}")]
    NotFound(String),

    /// Template syntax or execution error, not yet tied to a view name.
    ///
    /// Produced by the engine layer; the renderer rewraps this into
    /// [`ViewsError::Rendering`] once the view name is known.
    #[error("template error: {0}")]
    Template(String),

    /// Context data did not normalize to a key-value mapping.
    #[error("context error: {0}")]
    Context(String),

    /// Data serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O failure while reading a template or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration load or parse failure.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<minijinja::Error> for ViewsError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => ViewsError::NotFound(err.to_string()),
            ErrorKind::BadSerialization => ViewsError::Serialization(err.to_string()),
            ErrorKind::WriteFailure => ViewsError::Io(std::io::Error::other(err.to_string())),
            _ => ViewsError::Template(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ViewsError {
    fn from(err: serde_json::Error) -> Self {
        ViewsError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ViewsError {
    fn from(err: serde_yaml::Error) -> Self {
        ViewsError::Config(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ViewsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ViewsError::Serialization(err.to_string())
    }
}
