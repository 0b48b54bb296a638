//! Path utilities for validation, normalization and base-path handling
//!
//! All functions are pure: same input, same output, no side effects.

use std::borrow::Cow;

pub mod base;
pub use base::{join_base, normalize_base, strip_base};

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use sueldo_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/salary"));
/// assert!(is_valid_path("/irpf-credit-for-rent"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("salary")); // Missing leading /
/// assert!(!is_valid_path("/salary/")); // Trailing /
/// assert!(!is_valid_path("/salary//data")); // Double //
/// assert!(!is_valid_path("/salary\\data")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and
/// `Cow::Owned` when it had to be rewritten.
///
/// - Trailing slashes: `/salary/` → `/salary`
/// - Double slashes: `/salary//data` → `/salary/data`
/// - Backslashes: `\fonasa` → `/fonasa`
/// - Missing leading slash: `fonasa` → `/fonasa`
/// - Empty input: `` → `/`
///
/// # Examples
///
/// ```
/// use sueldo_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/salary");
/// assert!(matches!(path, Cow::Borrowed("/salary")));
///
/// assert_eq!(normalize_path("/salary/"), "/salary");
/// assert_eq!(normalize_path("\\fonasa"), "/fonasa");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a URL-ish string into its path part, dropping `?query` and `#fragment`
///
/// ```
/// use sueldo_router::path::split_path;
///
/// assert_eq!(split_path("/salary?gross=1000#top"), "/salary");
/// assert_eq!(split_path("/fonasa"), "/fonasa");
/// ```
pub fn split_path(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |idx| &url[..idx])
}
