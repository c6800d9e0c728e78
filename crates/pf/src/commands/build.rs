//! `page-forge build` command implementation.

use std::path::Path;

use clap::Args;
use pf_site::{SiteContext, StaticSiteBuilder};

use crate::commands::check::load_checked;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Exit with an error if any page fails to convert.
    #[arg(long)]
    strict: bool,
}

impl BuildArgs {
    /// Validate the project and convert every page into `out/`.
    pub(crate) fn execute(self, root: &Path) -> Result<(), CliError> {
        let output = Output::new();
        let (project, config) = load_checked(root)?;
        output.building(&project);

        let out_dir = project.out_dir();
        let report = StaticSiteBuilder::new(SiteContext::new(project, config)).build()?;
        output.page_failures(&report);

        if self.strict && !report.is_success() {
            return Err(CliError::PagesFailed {
                count: report.failures.len(),
            });
        }

        output.built(&report, &out_dir);
        Ok(())
    }
}
