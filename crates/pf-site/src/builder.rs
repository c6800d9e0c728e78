//! Static site builder: mirrors `pages/` into `out/` as HTML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::page::{RenderError, SiteContext, render_page};

/// Error that aborts the whole build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Output directory could not be cleared or created.
    #[error("Failed to prepare output directory {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A directory in the pages tree could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A page that failed to convert. The build continues past it.
#[derive(Debug)]
pub struct PageFailure {
    /// Markdown source file.
    pub source: PathBuf,
    pub error: RenderError,
}

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// HTML files written, in walk order.
    pub written: Vec<PathBuf>,
    /// Pages that could not be converted.
    pub failures: Vec<PageFailure>,
}

impl BuildReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds the static site for a project.
///
/// Every `.md` file under `pages/` becomes an `.html` file at the same
/// relative location under `out/`. Other files are ignored. Directories are
/// visited in lexical order and hidden entries are skipped.
pub struct StaticSiteBuilder {
    site: SiteContext,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(site: SiteContext) -> Self {
        Self { site }
    }

    /// Clear the output directory and convert every page.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the output directory cannot be prepared or
    /// a pages directory cannot be listed. Per-page failures are collected in
    /// the returned [`BuildReport`] instead.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let out_dir = self.site.project.out_dir();
        Self::prepare_output(&out_dir)?;

        let mut report = BuildReport::default();
        self.build_dir(&self.site.project.pages_dir(), &out_dir, &mut report)?;

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "Build completed"
        );
        Ok(report)
    }

    fn prepare_output(out_dir: &Path) -> Result<(), BuildError> {
        let wrap = |source| BuildError::Output {
            path: out_dir.to_path_buf(),
            source,
        };
        if out_dir.exists() {
            fs::remove_dir_all(out_dir).map_err(wrap)?;
        }
        fs::create_dir_all(out_dir).map_err(wrap)
    }

    fn build_dir(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        report: &mut BuildReport,
    ) -> Result<(), BuildError> {
        let walk_err = |source| BuildError::Walk {
            path: source_dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(source_dir)
            .map_err(walk_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(walk_err)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                let child_output = output_dir.join(&name);
                fs::create_dir_all(&child_output).map_err(|source| BuildError::Output {
                    path: child_output.clone(),
                    source,
                })?;
                self.build_dir(&path, &child_output, report)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                let output_path = output_dir.join(&name).with_extension("html");
                match self.convert(&path, &output_path) {
                    Ok(()) => report.written.push(output_path),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), error = %error, "Failed to convert page");
                        report.failures.push(PageFailure {
                            source: path,
                            error,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn convert(&self, source_path: &Path, output_path: &Path) -> Result<(), RenderError> {
        let bytes = fs::read(source_path)?;
        let source = String::from_utf8_lossy(&bytes);
        let html = render_page(&source, source_path, output_path, &self.site)?;
        fs::write(output_path, html)?;
        tracing::debug!(output = %output_path.display(), "Wrote page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_config::{NavEntry, Project, SiteConfig};

    fn project_with_pages(pages: &[(&str, &str)]) -> (tempfile::TempDir, SiteContext) {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path());
        for (rel, content) in pages {
            let path = project.pages_dir().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let config = SiteConfig {
            name: "Test Site".to_owned(),
            theme: "default".to_owned(),
            nav_elements: vec![NavEntry {
                title: "Home".to_owned(),
                href: "index.html".to_owned(),
            }],
        };
        (dir, SiteContext::new(project, config))
    }

    #[test]
    fn test_build_mirrors_tree() {
        let (_dir, site) = project_with_pages(&[
            ("index.md", "# Home"),
            ("guide/install.md", "---\ntitle: Install\n---\nSteps"),
            ("guide/deep/faq.md", "FAQ"),
        ]);
        let out = site.project.out_dir();
        let report = StaticSiteBuilder::new(site).build().unwrap();

        assert!(report.is_success());
        assert_eq!(
            report.written,
            vec![
                out.join("guide/deep/faq.html"),
                out.join("guide/install.html"),
                out.join("index.html"),
            ]
        );

        let install = fs::read_to_string(out.join("guide/install.html")).unwrap();
        assert!(install.contains("<title>Install | Test Site</title>"));
        assert!(install.contains("<p>Steps</p>"));
        assert!(install.contains(r#"<a href="../index.html" class="">Home</a>"#));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="" class="nav-active">Home</a>"#));
    }

    #[test]
    fn test_build_ignores_non_markdown_and_hidden() {
        let (_dir, site) = project_with_pages(&[
            ("index.md", "x"),
            ("notes.txt", "not markdown"),
            (".draft.md", "hidden"),
        ]);
        let out = site.project.out_dir();
        let report = StaticSiteBuilder::new(site).build().unwrap();

        assert_eq!(report.written, vec![out.join("index.html")]);
        assert!(!out.join("notes.txt").exists());
        assert!(!out.join(".draft.html").exists());
    }

    #[test]
    fn test_build_creates_empty_directories() {
        let (_dir, site) = project_with_pages(&[("index.md", "x")]);
        fs::create_dir_all(site.project.pages_dir().join("empty")).unwrap();
        let out = site.project.out_dir();
        StaticSiteBuilder::new(site).build().unwrap();
        assert!(out.join("empty").is_dir());
    }

    #[test]
    fn test_build_clears_previous_output() {
        let (_dir, site) = project_with_pages(&[("index.md", "x")]);
        let out = site.project.out_dir();
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.html"), "old").unwrap();

        StaticSiteBuilder::new(site).build().unwrap();
        assert!(!out.join("stale.html").exists());
        assert!(out.join("index.html").exists());
    }

    #[test]
    fn test_build_continues_after_page_failure() {
        let (_dir, site) = project_with_pages(&[
            ("a.md", "---\nbroken\n---\n"),
            ("b.md", "fine"),
        ]);
        let out = site.project.out_dir();
        let report = StaticSiteBuilder::new(site).build().unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].source.ends_with("a.md"));
        assert!(matches!(
            report.failures[0].error,
            RenderError::FrontMatter { .. }
        ));
        assert!(!out.join("a.html").exists());
        assert_eq!(report.written, vec![out.join("b.html")]);
    }

    #[test]
    fn test_build_accepts_non_utf8_page() {
        let (_dir, site) = project_with_pages(&[]);
        let pages = site.project.pages_dir();
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("index.md"), b"# Caf\xe9\n").unwrap();
        let out = site.project.out_dir();
        let report = StaticSiteBuilder::new(site).build().unwrap();

        assert!(report.is_success());
        assert_eq!(report.written, vec![out.join("index.html")]);
        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<h1>Caf\u{fffd}</h1>"));
    }

    #[test]
    fn test_build_missing_theme_fails_every_page() {
        let (_dir, mut site) = project_with_pages(&[("index.md", "x"), ("b.md", "y")]);
        site.config.theme = "nope.html".to_owned();
        let report = StaticSiteBuilder::new(site).build().unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn test_build_missing_pages_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let site = SiteContext::new(Project::new(dir.path()), SiteConfig::starter("s"));
        let err = StaticSiteBuilder::new(site).build().unwrap_err();
        assert!(matches!(err, BuildError::Walk { .. }));
    }
}
