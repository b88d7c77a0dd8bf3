//! Breadcrumb trail items.

use crate::config::MAX_CRUMB_LABEL_LENGTH;

/// Label used for the collapsed crumb.
pub const ELLIPSIS: &str = "…";

/// One element of the breadcrumb trail.
///
/// Ellipsis crumbs stand in for collapsed path segments; their `path` is
/// empty and `hidden_labels` holds the collapsed labels joined with `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
    pub is_ellipsis: bool,
    pub hidden_labels: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            is_ellipsis: false,
            hidden_labels: None,
        }
    }

    pub fn ellipsis(hidden_labels: impl Into<String>) -> Self {
        Self {
            label: ELLIPSIS.to_string(),
            path: String::new(),
            is_ellipsis: true,
            hidden_labels: Some(hidden_labels.into()),
        }
    }

    /// Label shortened to `MAX_CRUMB_LABEL_LENGTH` characters plus `…`.
    pub fn display_label(&self) -> String {
        if self.is_truncated() {
            let head: String = self.label.chars().take(MAX_CRUMB_LABEL_LENGTH).collect();
            format!("{head}{ELLIPSIS}")
        } else {
            self.label.clone()
        }
    }

    /// Hover text: hidden labels for an ellipsis, the full label when truncated.
    pub fn title(&self) -> Option<String> {
        if self.is_ellipsis {
            self.hidden_labels.clone()
        } else if self.is_truncated() {
            Some(self.label.clone())
        } else {
            None
        }
    }

    /// Whether the crumb at `idx` of a `len`-long trail renders as a link.
    /// The last crumb and ellipsis crumbs are plain text.
    pub fn is_link(&self, idx: usize, len: usize) -> bool {
        !self.is_ellipsis && idx + 1 < len
    }

    fn is_truncated(&self) -> bool {
        !self.is_ellipsis && self.label.chars().count() > MAX_CRUMB_LABEL_LENGTH
    }
}
