//! `page-forge init` command implementation.

use std::path::Path;

use clap::Args;
use pf_config::Project;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Name of the project directory to create.
    name: String,
}

impl InitArgs {
    /// Create `<project>/<name>` with a starter site.
    pub(crate) fn execute(self, parent: &Path) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::scaffold(parent, &self.name)?;
        output.created(&project);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_project() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            name: "site".to_owned(),
        };
        args.execute(dir.path()).unwrap();
        assert!(dir.path().join("site/site.json").is_file());
        assert!(dir.path().join("site/pages/index.md").is_file());
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let make = || InitArgs {
            name: "site".to_owned(),
        };
        make().execute(dir.path()).unwrap();
        assert!(matches!(
            make().execute(dir.path()),
            Err(CliError::Config(_))
        ));
    }
}
