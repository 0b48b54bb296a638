//! Base-path prefixing
//!
//! A base path is the URL prefix the whole application is served under. It
//! is kept in the form `/` or `/segment[/segment...]` with no trailing slash.

use super::normalize_path;

/// Normalizes a configured base path
///
/// # Examples
///
/// ```
/// use sueldo_router::path::normalize_base;
///
/// assert_eq!(normalize_base(""), "/");
/// assert_eq!(normalize_base("/"), "/");
/// assert_eq!(normalize_base("app/"), "/app");
/// assert_eq!(normalize_base("/tools/sueldo/"), "/tools/sueldo");
/// ```
pub fn normalize_base(base: &str) -> String {
    normalize_path(base.trim()).into_owned()
}

/// Strips the base prefix from a path
///
/// Returns `None` when the path does not live under `base`. The prefix must
/// end on a segment boundary, so `/application` is not under `/app`.
///
/// # Examples
///
/// ```
/// use sueldo_router::path::strip_base;
///
/// assert_eq!(strip_base("/app", "/app/salary"), Some("/salary"));
/// assert_eq!(strip_base("/app", "/app"), Some("/"));
/// assert_eq!(strip_base("/app", "/app/"), Some("/"));
/// assert_eq!(strip_base("/app", "/application"), None);
/// assert_eq!(strip_base("/", "/fonasa"), Some("/fonasa"));
/// ```
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    if base == "/" {
        return Some(if path.is_empty() { "/" } else { path });
    }

    let rest = path.strip_prefix(base)?;
    match rest {
        "" | "/" => Some("/"),
        _ if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Prefixes a route path with the base path
///
/// # Examples
///
/// ```
/// use sueldo_router::path::join_base;
///
/// assert_eq!(join_base("/", "/salary"), "/salary");
/// assert_eq!(join_base("/app", "/salary"), "/app/salary");
/// assert_eq!(join_base("/app", "/"), "/app/");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    if base == "/" {
        path.to_string()
    } else if path == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_then_join_is_identity_under_base() {
        for path in ["/", "/salary", "/irpf-credit-for-rent"] {
            for base in ["/", "/app", "/a/b"] {
                let url = join_base(base, path);
                assert_eq!(strip_base(base, &url), Some(path), "base={base} path={path}");
            }
        }
    }

    #[test]
    fn test_strip_base_rejects_foreign_prefix() {
        assert_eq!(strip_base("/app", "/other/salary"), None);
        assert_eq!(strip_base("/app", "/apps"), None);
        assert_eq!(strip_base("/app", ""), None);
    }

    #[test]
    fn test_normalize_base_whitespace() {
        assert_eq!(normalize_base("  /app/  "), "/app");
    }
}
