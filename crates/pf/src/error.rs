//! CLI error types.

use pf_config::ConfigError;
use pf_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{count} page(s) failed to build")]
    PagesFailed { count: usize },
}
