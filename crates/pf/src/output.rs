//! Styled stderr reporting for page-forge commands.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use pf_config::{Project, SiteConfig};
use pf_site::{BuildReport, PageFailure};

/// Severity of a report line; picks its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Plain,
    Done,
    Warn,
    Fail,
}

impl Level {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Done => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Fail => Style::new().red(),
        }
    }
}

/// Command reporter writing to stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, level: Level, msg: &str) {
        let _ = self
            .term
            .write_line(&level.style().apply_to(msg).to_string());
    }

    pub(crate) fn building(&self, project: &Project) {
        self.line(Level::Plain, &building_line(project.root()));
    }

    /// One warning line per page that failed to convert.
    pub(crate) fn page_failures(&self, report: &BuildReport) {
        for failure in &report.failures {
            self.line(Level::Warn, &failure_line(failure));
        }
    }

    pub(crate) fn built(&self, report: &BuildReport, out_dir: &Path) {
        self.line(Level::Done, &built_line(report, out_dir));
    }

    pub(crate) fn site_valid(&self, config: &SiteConfig) {
        self.line(Level::Done, &valid_line(config));
    }

    pub(crate) fn created(&self, project: &Project) {
        let root = project.root().display();
        self.line(Level::Done, &format!("Created project in {root}"));
        self.line(Level::Plain, &format!("Next: cd {root} && page-forge build"));
    }

    /// Final line for a command that failed.
    pub(crate) fn fatal(&self, err: &impl Display) {
        self.line(Level::Fail, &format!("ERROR: {err}"));
    }
}

fn building_line(root: &Path) -> String {
    format!("Building {}...", root.display())
}

fn failure_line(failure: &PageFailure) -> String {
    format!(
        "ERROR: Failed to convert {}: {}",
        failure.source.display(),
        failure.error
    )
}

fn built_line(report: &BuildReport, out_dir: &Path) -> String {
    let pages = report.written.len();
    let noun = if pages == 1 { "page" } else { "pages" };
    if report.is_success() {
        format!(
            "Project successfully built ({pages} {noun}), see {}",
            out_dir.display()
        )
    } else {
        format!(
            "Project built with {} failed ({pages} {noun} written), see {}",
            report.failures.len(),
            out_dir.display()
        )
    }
}

fn valid_line(config: &SiteConfig) -> String {
    let entries = config.nav_elements.len();
    format!(
        "Project \"{}\" is valid ({entries} navigation {})",
        config.name,
        if entries == 1 { "entry" } else { "entries" }
    )
}
