//! Page-relative navigation links.

use std::fmt::Write;

use pf_config::NavEntry;
use pf_renderer::relative_path;

/// CSS class marking the entry for the page being rendered.
const ACTIVE_CLASS: &str = "nav-active";

/// Resolve a navigation target relative to the page at `current`.
///
/// Both paths are relative to the output root. The relative path is computed
/// from `current` treated as a directory, then one leading `../` and one
/// trailing `.` are stripped. An empty result means `href` is the current
/// page.
///
/// Treating the page file as a directory adds exactly one `..` segment, which
/// the leading strip removes again.
///
/// # Examples
///
/// ```
/// use pf_site::resolve_href;
///
/// assert_eq!(resolve_href("index.html", "about.html"), "about.html");
/// assert_eq!(resolve_href("blog/post.html", "index.html"), "../index.html");
/// assert_eq!(resolve_href("blog/post.html", "blog/post.html"), "");
/// ```
#[must_use]
pub fn resolve_href(current: &str, href: &str) -> String {
    let Some(relative) = relative_path(current, href) else {
        tracing::warn!(
            page = %current,
            href = %href,
            "No relative path to navigation target, using configured href"
        );
        return href.trim_start_matches('/').to_owned();
    };

    let relative = relative.strip_prefix("../").unwrap_or(&relative);
    relative.strip_suffix('.').unwrap_or(relative).to_owned()
}

/// Render navigation entries as `<li>` items in configured order.
#[must_use]
pub fn render_nav(entries: &[NavEntry], current: &str) -> String {
    let mut html = String::new();
    for entry in entries {
        let href = resolve_href(current, &entry.href);
        let class = if href.is_empty() { ACTIVE_CLASS } else { "" };
        write!(
            html,
            r#"<li><a href="{href}" class="{class}">{}</a></li>"#,
            entry.title
        )
        .unwrap();
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(title: &str, href: &str) -> NavEntry {
        NavEntry {
            title: title.to_owned(),
            href: href.to_owned(),
        }
    }

    #[test]
    fn test_resolve_root_sibling() {
        assert_eq!(resolve_href("index.html", "guide.html"), "guide.html");
    }

    #[test]
    fn test_resolve_root_to_nested() {
        assert_eq!(
            resolve_href("index.html", "docs/install.html"),
            "docs/install.html"
        );
    }

    #[test]
    fn test_resolve_nested_to_root() {
        assert_eq!(resolve_href("blog/post.html", "index.html"), "../index.html");
    }

    #[test]
    fn test_resolve_with_output_prefix() {
        let href = resolve_href("out/blog/post.html", "out/index.html");
        assert_eq!(href, "../index.html");
        assert!(!href.starts_with('/'));
    }

    #[test]
    fn test_resolve_nested_sibling() {
        assert_eq!(resolve_href("blog/a.html", "blog/b.html"), "b.html");
    }

    #[test]
    fn test_resolve_current_page_is_empty() {
        assert_eq!(resolve_href("index.html", "index.html"), "");
        assert_eq!(resolve_href("a/b.html", "./a/b.html"), "");
    }

    #[test]
    fn test_resolve_two_levels_up() {
        assert_eq!(resolve_href("a/b/c.html", "index.html"), "../../index.html");
    }

    #[test]
    fn test_resolve_absolute_target_falls_back() {
        assert_eq!(resolve_href("index.html", "/about.html"), "about.html");
    }

    #[test]
    fn test_render_nav_marks_active_entry() {
        let entries = [entry("Home", "index.html"), entry("About", "about.html")];
        assert_eq!(
            render_nav(&entries, "index.html"),
            concat!(
                r#"<li><a href="" class="nav-active">Home</a></li>"#,
                r#"<li><a href="about.html" class="">About</a></li>"#,
            )
        );
    }

    #[test]
    fn test_render_nav_keeps_configured_order() {
        let entries = [
            entry("Zeta", "z.html"),
            entry("Alpha", "a.html"),
            entry("Mid", "m.html"),
        ];
        let html = render_nav(&entries, "other.html");
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        let mid = html.find("Mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_render_nav_empty() {
        assert_eq!(render_nav(&[], "index.html"), "");
    }
}
