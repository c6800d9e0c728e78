//! Page composition and static site building for page-forge.
//!
//! This crate provides:
//! - [`render_page`]: front matter, Markdown body and theme template combined
//!   into one HTML page
//! - [`compose`] and [`resolve_href`]: placeholder substitution and
//!   page-relative navigation links
//! - [`StaticSiteBuilder`]: converts a whole `pages/` tree into `out/`
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pf_config::Project;
//! use pf_site::{SiteContext, StaticSiteBuilder};
//!
//! let project = Project::new(".");
//! project.validate()?;
//! let config = project.load_config()?;
//!
//! let report = StaticSiteBuilder::new(SiteContext::new(project, config)).build()?;
//! for failure in &report.failures {
//!     eprintln!("{}: {}", failure.source.display(), failure.error);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod nav;
mod page;
mod template;

pub use builder::{BuildError, BuildReport, PageFailure, StaticSiteBuilder};
pub use nav::{render_nav, resolve_href};
pub use page::{RenderError, SiteContext, render_page};
pub use template::{DEFAULT_TEMPLATE, PageContext, TemplateError, compose, load_template};
