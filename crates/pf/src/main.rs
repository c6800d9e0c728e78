//! page-forge CLI - Markdown to static HTML site generator.
//!
//! Provides commands for:
//! - `init`: Create a new project skeleton
//! - `check`: Validate a project layout
//! - `build`: Convert `pages/` into HTML under `out/`

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, InitArgs};
use output::Output;

/// page-forge - Markdown to static HTML site generator.
#[derive(Parser)]
#[command(name = "page-forge", version, about)]
struct Cli {
    /// Project directory.
    #[arg(short, long, global = true, env = "PAGE_FORGE_PROJECT", default_value = ".")]
    project: PathBuf,

    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project.
    Init(InitArgs),
    /// Validate the project layout.
    Check,
    /// Build the site.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init(args) => args.execute(&cli.project),
        Commands::Check => commands::check::execute(&cli.project),
        Commands::Build(args) => args.execute(&cli.project),
    };

    if let Err(err) = result {
        output.fatal(&err);
        std::process::exit(1);
    }
}
