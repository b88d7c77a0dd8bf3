//! Redirect target validation.
//!
//! Login redirects come from the URL, so they must never leave the app.

use crate::config::DEFAULT_REDIRECT;

/// Result of redirect validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectValidation {
    /// Target is an in-app path and safe to navigate to
    Valid(String),
    /// Target is missing or points elsewhere
    Invalid(RedirectValidationError),
}

/// Reasons a redirect target is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectValidationError {
    /// Target is empty
    Empty,
    /// Target doesn't start with `/`
    NotRelative,
    /// Target starts with `//` (protocol-relative URL to another host)
    ProtocolRelative,
}

impl std::fmt::Display for RedirectValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "redirect target is empty"),
            Self::NotRelative => write!(f, "redirect target must start with /"),
            Self::ProtocolRelative => write!(f, "redirect target must not start with //"),
        }
    }
}

/// Validate a redirect target.
///
/// Checks:
/// 1. Target is not empty
/// 2. Target starts with `/`
/// 3. Target does not start with `//` or `/\`
pub fn validate_redirect(target: &str) -> RedirectValidation {
    let target = target.trim();

    if target.is_empty() {
        return RedirectValidation::Invalid(RedirectValidationError::Empty);
    }
    if !target.starts_with('/') {
        return RedirectValidation::Invalid(RedirectValidationError::NotRelative);
    }
    if target.starts_with("//") || target.starts_with("/\\") {
        return RedirectValidation::Invalid(RedirectValidationError::ProtocolRelative);
    }

    RedirectValidation::Valid(target.to_string())
}

/// Validated redirect target, falling back to the directory browser root.
pub fn safe_redirect(target: Option<&str>) -> String {
    match target.map(validate_redirect) {
        Some(RedirectValidation::Valid(target)) => target,
        _ => DEFAULT_REDIRECT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_targets() {
        assert_eq!(
            validate_redirect("/files/docs?sort=size:asc"),
            RedirectValidation::Valid("/files/docs?sort=size:asc".to_string())
        );
        assert!(matches!(validate_redirect("/"), RedirectValidation::Valid(_)));
    }

    #[test]
    fn test_invalid_targets() {
        assert_eq!(
            validate_redirect(""),
            RedirectValidation::Invalid(RedirectValidationError::Empty)
        );
        assert_eq!(
            validate_redirect("https://evil.com/phishing"),
            RedirectValidation::Invalid(RedirectValidationError::NotRelative)
        );
        assert_eq!(
            validate_redirect("javascript:alert(1)"),
            RedirectValidation::Invalid(RedirectValidationError::NotRelative)
        );
        assert_eq!(
            validate_redirect("//evil.com"),
            RedirectValidation::Invalid(RedirectValidationError::ProtocolRelative)
        );
        assert_eq!(
            validate_redirect("/\\evil.com"),
            RedirectValidation::Invalid(RedirectValidationError::ProtocolRelative)
        );
    }

    #[test]
    fn test_safe_redirect_fallback() {
        assert_eq!(safe_redirect(None), "/files");
        assert_eq!(safe_redirect(Some("https://evil.com")), "/files");
        assert_eq!(safe_redirect(Some("/files/a")), "/files/a");
    }
}
