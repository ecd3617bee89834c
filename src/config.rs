//! Views configuration.
//!
//! [`ViewsConfig`] holds the two settings that drive view resolution: the
//! folder templates live under and the default file extension. It is built
//! once and treated as read-only for the renderer's lifetime.
//!
//! Configuration can be constructed in code or loaded from YAML:
//!
//! ```rust
//! use minijinja_views::ViewsConfig;
//!
//! let config = ViewsConfig::from_yaml(r#"
//! folder: templates
//! extension: jinja
//! "#).unwrap();
//!
//! assert_eq!(config.folder, "templates");
//! assert_eq!(config.extension, "jinja");
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Default folder searched for view templates.
pub const DEFAULT_FOLDER: &str = "views";

/// Default view file extension.
pub const DEFAULT_EXTENSION: &str = "html";

/// Configuration for view resolution.
///
/// Missing fields fall back to [`DEFAULT_FOLDER`] and [`DEFAULT_EXTENSION`]
/// when deserializing, so a partial YAML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsConfig {
    /// Folder templates are resolved under (e.g. `"views"`).
    pub folder: String,
    /// Default extension appended to view names (without the dot).
    pub extension: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ViewsConfig {
    /// Creates a configuration with the default folder and extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the views folder.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Sets the default extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Parses a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ViewsError::Config`](crate::ViewsError::Config) if the
    /// document is not valid YAML or contains unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
