//! Single-page rendering pipeline.

use std::path::{Component, Path, PathBuf};

use pf_config::{Project, SiteConfig};
use pf_meta::FrontMatterError;

use crate::template::{PageContext, TemplateError, compose, load_template};

/// Error returned when a page cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Malformed front matter block.
    #[error("{}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
    /// Theme template could not be loaded.
    #[error("{0}")]
    Template(#[from] TemplateError),
    /// I/O error reading the source or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Site-wide state shared by every page of a build.
#[derive(Clone, Debug)]
pub struct SiteContext {
    pub project: Project,
    pub config: SiteConfig,
}

impl SiteContext {
    #[must_use]
    pub fn new(project: Project, config: SiteConfig) -> Self {
        Self { project, config }
    }

    /// Output path relative to the output root, with `/` separators.
    fn page_path(&self, output_path: &Path) -> String {
        let out_dir = self.project.out_dir();
        let relative = output_path.strip_prefix(&out_dir).unwrap_or(output_path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Render one Markdown source into a complete HTML page.
///
/// Extracts front matter, renders the body, and composes it into the site
/// template with the page title, subtitle and navigation. A page without a
/// `title` entry is titled after its source file stem.
///
/// # Errors
///
/// Returns an error if the front matter is malformed or the theme template
/// cannot be loaded. No partial output is produced.
pub fn render_page(
    source: &str,
    source_path: &Path,
    output_path: &Path,
    site: &SiteContext,
) -> Result<String, RenderError> {
    let front = pf_meta::extract(source).map_err(|err| RenderError::FrontMatter {
        path: source_path.to_path_buf(),
        source: err,
    })?;

    let content = pf_renderer::render(&pf_renderer::parse(front.body));

    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let title = front.metadata.title().unwrap_or(stem.as_ref());
    let subtitle = front.metadata.subtitle().unwrap_or_default();
    let current_path = site.page_path(output_path);

    let template = load_template(&site.project, &site.config)?;

    tracing::debug!(
        source = %source_path.display(),
        page = %current_path,
        metadata = front.metadata.len(),
        "Rendering page"
    );

    Ok(compose(
        &template,
        &PageContext {
            title,
            subtitle,
            site_name: &site.config.name,
            nav_entries: &site.config.nav_elements,
            current_path: &current_path,
            content: &content,
        },
    ))
}
