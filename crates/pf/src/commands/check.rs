//! `page-forge check` command implementation.

use std::path::Path;

use pf_config::{Project, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Validate the project layout and its site configuration.
pub(crate) fn execute(root: &Path) -> Result<(), CliError> {
    let output = Output::new();
    let (_, config) = load_checked(root)?;
    output.site_valid(&config);
    Ok(())
}

/// Run the project checks and load `site.json`.
pub(crate) fn load_checked(root: &Path) -> Result<(Project, SiteConfig), CliError> {
    let project = Project::new(root);
    project.validate()?;
    let config = project.load_config()?;
    Ok((project, config))
}
