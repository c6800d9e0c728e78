//! Project directory layout and pre-build checks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{CONFIG_FILENAME, ConfigError, SiteConfig};

const PAGES_DIR: &str = "pages";
const OUT_DIR: &str = "out";
const THEMES_DIR: &str = "themes";
const INDEX_PAGE: &str = "index.md";

/// Page written into new projects.
const STARTER_INDEX: &str = "---\ntitle: Welcome\nsubtitle: Your new site\n---\n\n# Hello\n\nEdit `pages/index.md` and run `page-forge build`.\n";

/// A page-forge project rooted at a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Create a project handle for `root`. Nothing is checked on disk.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `site.json`.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    /// Markdown source tree.
    #[must_use]
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    /// Generated HTML tree.
    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root.join(OUT_DIR)
    }

    /// Directory holding custom theme templates.
    #[must_use]
    pub fn themes_dir(&self) -> PathBuf {
        self.root.join(THEMES_DIR)
    }

    /// Load the site configuration for this project.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::load`].
    pub fn load_config(&self) -> Result<SiteConfig, ConfigError> {
        SiteConfig::load(&self.config_path())
    }

    /// Check that the project can be built.
    ///
    /// Requires `site.json` to be a file, `pages/` to be a directory, and
    /// `pages/index.md` to exist. The first failing check is reported.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first failed check, or
    /// `ConfigError::Io` if `pages/` cannot be listed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.config_path().is_file() {
            return Err(ConfigError::Validation(format!(
                "{CONFIG_FILENAME} does not exist"
            )));
        }

        let pages = self.pages_dir();
        if !pages.is_dir() {
            return Err(ConfigError::Validation(format!(
                "Directory {PAGES_DIR} not found"
            )));
        }

        let has_index = fs::read_dir(&pages)?
            .filter_map(Result::ok)
            .any(|e| e.file_name() == INDEX_PAGE && e.file_type().is_ok_and(|t| t.is_file()));
        if !has_index {
            return Err(ConfigError::Validation(format!(
                "No {INDEX_PAGE} in {PAGES_DIR} directory"
            )));
        }

        Ok(())
    }

    /// Create a new project directory `parent/name` with a starter config,
    /// an index page and an empty themes directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the directory already exists, or
    /// an I/O error if any file cannot be written.
    pub fn scaffold(parent: &Path, name: &str) -> Result<Self, ConfigError> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "invalid project name: {name:?}"
            )));
        }

        let project = Self::new(parent.join(name));
        if project.root.exists() {
            return Err(ConfigError::Validation(format!(
                "{} already exists",
                project.root.display()
            )));
        }

        fs::create_dir_all(project.pages_dir())?;
        fs::create_dir_all(project.themes_dir())?;
        fs::write(project.config_path(), SiteConfig::starter(name).to_json()?)?;
        fs::write(project.pages_dir().join(INDEX_PAGE), STARTER_INDEX)?;

        Ok(project)
    }
}
