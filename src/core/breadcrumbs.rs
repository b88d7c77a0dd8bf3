//! Breadcrumb derivation from the current pathname.

use crate::models::Breadcrumb;
use crate::utils::decode_component;

/// Build the crumb trail for `pathname`.
///
/// Returns `None` when the path is outside `home_route`. The first crumb is
/// relabeled `home_label`; when more than `max_crumbs` crumbs follow it, the
/// earliest ones collapse into a single ellipsis crumb.
pub fn derive_breadcrumbs(
    pathname: &str,
    home_route: &str,
    home_label: &str,
    max_crumbs: usize,
) -> Option<Vec<Breadcrumb>> {
    let root = home_route.trim_start_matches('/');
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    if segments.first() != Some(&root) {
        return None;
    }

    let mut crumbs: Vec<Breadcrumb> = segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let path = format!("/{}", segments[..=idx].join("/"));
            Breadcrumb::link(decode_component(segment), path)
        })
        .collect();
    crumbs[0].label = home_label.to_string();

    let rest = crumbs.split_off(1);
    if rest.len() <= max_crumbs {
        crumbs.extend(rest);
        return Some(crumbs);
    }

    let (hidden, visible) = rest.split_at(rest.len() - max_crumbs);
    let hidden_labels: Vec<&str> = hidden.iter().map(|c| c.label.as_str()).collect();
    crumbs.push(Breadcrumb::ellipsis(hidden_labels.join("/")));
    crumbs.extend_from_slice(visible);
    Some(crumbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ELLIPSIS;

    fn labels(crumbs: &[Breadcrumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_outside_home_route() {
        assert_eq!(derive_breadcrumbs("/login", "files", "Home", 3), None);
        assert_eq!(derive_breadcrumbs("/", "files", "Home", 3), None);
        assert_eq!(derive_breadcrumbs("/filesx/a", "/files", "Home", 3), None);
    }

    #[test]
    fn test_home_only() {
        let crumbs = derive_breadcrumbs("/files", "/files", "Home", 3).unwrap();
        assert_eq!(crumbs, vec![Breadcrumb::link("Home", "/files")]);
    }

    #[test]
    fn test_short_path() {
        let crumbs = derive_breadcrumbs("/files/docs/My%20Notes", "files", "Home", 3).unwrap();
        assert_eq!(
            crumbs,
            vec![
                Breadcrumb::link("Home", "/files"),
                Breadcrumb::link("docs", "/files/docs"),
                Breadcrumb::link("My Notes", "/files/docs/My%20Notes"),
            ]
        );
    }

    #[test]
    fn test_exactly_max_not_collapsed() {
        let crumbs = derive_breadcrumbs("/files/a/b/c", "files", "Home", 3).unwrap();
        assert_eq!(labels(&crumbs), vec!["Home", "a", "b", "c"]);
        assert!(crumbs.iter().all(|c| !c.is_ellipsis));
    }

    #[test]
    fn test_deep_path_collapses() {
        let crumbs = derive_breadcrumbs("/files/a/b/c/d/e", "files", "Home", 3).unwrap();

        assert_eq!(labels(&crumbs), vec!["Home", ELLIPSIS, "c", "d", "e"]);
        assert_eq!(crumbs.iter().filter(|c| c.is_ellipsis).count(), 1);
        assert_eq!(crumbs[1], Breadcrumb::ellipsis("a/b"));
        assert_eq!(crumbs[2].path, "/files/a/b/c");
        assert_eq!(crumbs[4].path, "/files/a/b/c/d/e");
    }

    #[test]
    fn test_custom_max() {
        let crumbs = derive_breadcrumbs("/files/a/b/c", "files", "Home", 1).unwrap();
        assert_eq!(labels(&crumbs), vec!["Home", ELLIPSIS, "c"]);
        assert_eq!(crumbs[1].hidden_labels.as_deref(), Some("a/b"));
    }

    #[test]
    fn test_hidden_labels_are_decoded() {
        let crumbs =
            derive_breadcrumbs("/files/x%20y/b/c/d", "files", "Home", 3).unwrap();
        assert_eq!(crumbs[1].hidden_labels.as_deref(), Some("x y"));
    }

    fn links(crumbs: &[Breadcrumb]) -> Vec<bool> {
        crumbs
            .iter()
            .enumerate()
            .map(|(idx, crumb)| crumb.is_link(idx, crumbs.len()))
            .collect()
    }

    #[test]
    fn test_links_skip_ellipsis_and_last() {
        let crumbs = derive_breadcrumbs("/files/a/b/c/d/e", "files", "Home", 3).unwrap();
        assert_eq!(links(&crumbs), vec![true, false, true, true, false]);
    }

    #[test]
    fn test_home_only_is_not_a_link() {
        let crumbs = derive_breadcrumbs("/files", "files", "Home", 3).unwrap();
        assert_eq!(links(&crumbs), vec![false]);
    }
}
