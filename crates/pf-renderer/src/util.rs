//! Lexical path helpers shared by link and navigation rendering.

/// Normalize a `/`-separated path lexically.
///
/// Removes `.` segments and empty segments, folds `name/..` pairs, and drops
/// `..` at the root of an absolute path. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use pf_renderer::clean_path;
///
/// assert_eq!(clean_path("a//b/./c/.."), "a/b");
/// assert_eq!(clean_path("/../x"), "/x");
/// assert_eq!(clean_path(""), ".");
/// ```
#[must_use]
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_owned(),
        (false, false) => joined,
    }
}

/// Compute the path of `target` relative to the directory `base`.
///
/// Both paths are cleaned first and `base` is always treated as a directory,
/// even when it names a file. Equal paths yield `.`.
///
/// Returns `None` when no relative path exists: one path is absolute and the
/// other is not, or `base` climbs above its starting point with `..` in a
/// way `target` does not share.
///
/// # Examples
///
/// ```
/// use pf_renderer::relative_path;
///
/// assert_eq!(relative_path("a/b", "a/c").as_deref(), Some("../c"));
/// assert_eq!(relative_path("a", "a/b/c").as_deref(), Some("b/c"));
/// assert_eq!(relative_path("a", "a").as_deref(), Some("."));
/// assert_eq!(relative_path("/a", "b"), None);
/// ```
#[must_use]
pub fn relative_path(base: &str, target: &str) -> Option<String> {
    let base = clean_path(base);
    let target = clean_path(target);
    if base == target {
        return Some(".".to_owned());
    }
    if base.starts_with('/') != target.starts_with('/') {
        return None;
    }

    let base_segs: Vec<&str> = if base == "." {
        Vec::new()
    } else {
        base.split('/').filter(|s| !s.is_empty()).collect()
    };
    let target_segs: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();

    let common = base_segs
        .iter()
        .zip(&target_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let base_rest = &base_segs[common..];
    if base_rest.first() == Some(&"..") {
        return None;
    }

    let mut parts = vec![".."; base_rest.len()];
    parts.extend_from_slice(&target_segs[common..]);

    if parts.is_empty() {
        Some(".".to_owned())
    } else {
        Some(parts.join("/"))
    }
}
