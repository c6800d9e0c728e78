//! Theme templates and placeholder substitution.

use std::borrow::Cow;
use std::path::PathBuf;

use pf_config::{NavEntry, Project, SiteConfig};

use crate::nav::render_nav;

/// Built-in theme used when no custom theme is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../res/default_template.html");

const PAGE_TITLE: &str = "{{PAGE-TITLE}}";
const PAGE_SUBTITLE: &str = "{{PAGE-SUBTITLE}}";
const CONTENT: &str = "{{CONTENT}}";
const SITE_TITLE: &str = "{{SITE-TITLE}}";
const NAV_ELEMENTS: &str = "{{NAV-ELEMENTS}}";

/// Error returned when a theme template cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Theme file does not exist.
    #[error("Theme template not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Theme file exists but could not be read.
    #[error("Failed to read theme template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Values substituted into a theme template for one page.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub site_name: &'a str,
    pub nav_entries: &'a [NavEntry],
    /// Output path of the page, relative to the output root.
    pub current_path: &'a str,
    /// Rendered body HTML.
    pub content: &'a str,
}

/// Load the theme template configured for the site.
///
/// The built-in template is used for an empty or `"default"` theme. Any
/// other theme is read from `themes/<theme>` in the project.
///
/// # Errors
///
/// Returns [`TemplateError::NotFound`] if the theme file is missing.
pub fn load_template(
    project: &Project,
    config: &SiteConfig,
) -> Result<Cow<'static, str>, TemplateError> {
    if config.uses_default_theme() {
        return Ok(Cow::Borrowed(DEFAULT_TEMPLATE));
    }

    let path = project.themes_dir().join(&config.theme);
    if !path.is_file() {
        return Err(TemplateError::NotFound(path));
    }
    std::fs::read_to_string(&path)
        .map(Cow::Owned)
        .map_err(|source| TemplateError::Io { path, source })
}

/// Fill every placeholder in `template` with values from `ctx`.
///
/// All occurrences of each placeholder are replaced. Substitution is a single
/// left-to-right pass, so placeholder text inside substituted values is never
/// expanded again.
#[must_use]
pub fn compose(template: &str, ctx: &PageContext<'_>) -> String {
    let nav = render_nav(ctx.nav_entries, ctx.current_path);
    let values = [
        (PAGE_TITLE, ctx.title),
        (PAGE_SUBTITLE, ctx.subtitle),
        (CONTENT, ctx.content),
        (SITE_TITLE, ctx.site_name),
        (NAV_ELEMENTS, nav.as_str()),
    ];
    substitute(template, &values)
}

fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 4096);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match values.iter().find(|(token, _)| candidate.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &candidate[token.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &candidate[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context<'a>(nav: &'a [NavEntry], content: &'a str) -> PageContext<'a> {
        PageContext {
            title: "Install",
            subtitle: "Getting set up",
            site_name: "Docs",
            nav_entries: nav,
            current_path: "guide/install.html",
            content,
        }
    }

    #[test]
    fn test_compose_all_placeholders() {
        let nav = [NavEntry {
            title: "Home".to_owned(),
            href: "index.html".to_owned(),
        }];
        let template = "<title>{{PAGE-TITLE}}</title><h2>{{PAGE-SUBTITLE}}</h2>\
                        <header>{{SITE-TITLE}}</header><ul>{{NAV-ELEMENTS}}</ul>\
                        <main>{{CONTENT}}</main>";
        let html = compose(template, &context(&nav, "<p>Body</p>"));
        assert_eq!(
            html,
            "<title>Install</title><h2>Getting set up</h2><header>Docs</header>\
             <ul><li><a href=\"../index.html\" class=\"\">Home</a></li></ul>\
             <main><p>Body</p></main>"
        );
    }

    #[test]
    fn test_compose_replaces_every_occurrence() {
        let html = compose("{{SITE-TITLE}} - {{SITE-TITLE}}", &context(&[], ""));
        assert_eq!(html, "Docs - Docs");
    }

    #[test]
    fn test_compose_does_not_expand_substituted_values() {
        let html = compose("{{CONTENT}}|{{SITE-TITLE}}", &context(&[], "{{SITE-TITLE}}"));
        assert_eq!(html, "{{SITE-TITLE}}|Docs");
    }

    #[test]
    fn test_compose_leaves_unknown_placeholders() {
        let html = compose("{{UNKNOWN}} {{ {{PAGE-TITLE}}", &context(&[], ""));
        assert_eq!(html, "{{UNKNOWN}} {{ Install");
    }

    #[test]
    fn test_compose_placeholders_are_case_sensitive() {
        let html = compose("{{page-title}}", &context(&[], ""));
        assert_eq!(html, "{{page-title}}");
    }

    #[test]
    fn test_compose_without_placeholders() {
        assert_eq!(compose("plain", &context(&[], "x")), "plain");
    }

    #[test]
    fn test_default_template_has_all_placeholders() {
        for token in [PAGE_TITLE, PAGE_SUBTITLE, CONTENT, SITE_TITLE, NAV_ELEMENTS] {
            assert!(DEFAULT_TEMPLATE.contains(token), "{token}");
        }
    }

    #[test]
    fn test_load_default_template() {
        let project = Project::new("/nonexistent");
        let config = SiteConfig::starter("s");
        let template = load_template(&project, &config).unwrap();
        assert_eq!(template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_load_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path());
        std::fs::create_dir(project.themes_dir()).unwrap();
        std::fs::write(project.themes_dir().join("plain.html"), "<b>{{CONTENT}}</b>").unwrap();

        let mut config = SiteConfig::starter("s");
        config.theme = "plain.html".to_owned();
        let template = load_template(&project, &config).unwrap();
        assert_eq!(template, "<b>{{CONTENT}}</b>");
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path());
        let mut config = SiteConfig::starter("s");
        config.theme = "missing.html".to_owned();

        let err = load_template(&project, &config).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(p) if p.ends_with("themes/missing.html")));
    }
}
