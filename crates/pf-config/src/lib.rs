//! Site configuration and project layout for page-forge.
//!
//! A project directory looks like this:
//!
//! ```text
//! site.json        site name, theme and navigation entries
//! pages/           Markdown sources (must contain index.md)
//! themes/<name>    optional custom theme templates
//! out/             generated HTML (recreated on every build)
//! ```
//!
//! [`SiteConfig`] is parsed from `site.json` with serde. [`Project`] resolves
//! the directory layout and implements the project checks run before a build.

mod project;

pub use project::Project;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration filename at the project root.
pub const CONFIG_FILENAME: &str = "site.json";

/// Theme name selecting the built-in template.
pub const DEFAULT_THEME: &str = "default";

/// Site-wide configuration loaded from `site.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name substituted for `{{SITE-TITLE}}`.
    pub name: String,
    /// Theme identifier. Empty or `"default"` selects the built-in theme.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Navigation menu entries in display order.
    #[serde(default, rename = "nav-elements")]
    pub nav_elements: Vec<NavEntry>,
}

/// Single navigation menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Link text.
    pub title: String,
    /// Target output file, relative to the output root (e.g. `guide/install.html`).
    pub href: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl SiteConfig {
    /// Load and validate configuration from a `site.json` file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, unreadable, not valid JSON, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or fails validation.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the site name is empty or a
    /// navigation entry lacks a title or href.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.name, "name")?;
        for (i, entry) in self.nav_elements.iter().enumerate() {
            require_non_empty(&entry.title, &format!("nav-elements[{i}].title"))?;
            require_non_empty(&entry.href, &format!("nav-elements[{i}].href"))?;
        }
        Ok(())
    }

    /// Whether the built-in template should be used.
    #[must_use]
    pub fn uses_default_theme(&self) -> bool {
        self.theme.is_empty() || self.theme == DEFAULT_THEME
    }

    /// Starter configuration written by `page-forge init`.
    #[must_use]
    pub fn starter(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            theme: default_theme(),
            nav_elements: vec![NavEntry {
                title: "Home".to_owned(),
                href: "index.html".to_owned(),
            }],
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
