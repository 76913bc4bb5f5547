use std::time::Duration;

use url::Url;

pub const TRANSITION_ACTIVATE_DELAY: Duration = Duration::from_millis(10);
pub const TRANSITION_NAVIGATE_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Ignore,
    Section(String),
    InternalPage(String),
    External,
}

pub fn classify_href(href: &str) -> LinkTarget {
    let href = href.trim();
    if href == "#" {
        return LinkTarget::Ignore;
    }
    if let Some(id) = href.strip_prefix('#') {
        return LinkTarget::Section(id.to_string());
    }
    if href.starts_with('/') && !href.starts_with("//") {
        return LinkTarget::InternalPage(href.to_string());
    }
    LinkTarget::External
}

/// Resolves an internal path against the page it is clicked on. Returns `None`
/// if the result would leave the current origin.
pub fn resolve_internal(current: &str, path: &str) -> Option<Url> {
    let base = Url::parse(current).ok()?;
    let target = base.join(path).ok()?;

    (target.origin() == base.origin()).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_classified() {
        assert_eq!(classify_href("#"), LinkTarget::Ignore);
        assert_eq!(classify_href("#about"), LinkTarget::Section("about".to_string()));
        assert_eq!(classify_href("/blog"), LinkTarget::InternalPage("/blog".to_string()));
        assert_eq!(classify_href("//cdn.example.com/x.js"), LinkTarget::External);
        assert_eq!(classify_href("https://github.com"), LinkTarget::External);
    }

    #[test]
    fn internal_paths_resolve_on_same_origin() {
        let resolved = resolve_internal("https://me.dev/projects#top", "/blog?page=2")
            .expect("same-origin path");
        assert_eq!(resolved.as_str(), "https://me.dev/blog?page=2");
    }

    #[test]
    fn malformed_base_is_rejected() {
        assert!(resolve_internal("not a url", "/blog").is_none());
    }
}
