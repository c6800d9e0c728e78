//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod init;

pub(crate) use build::BuildArgs;
pub(crate) use init::InitArgs;
