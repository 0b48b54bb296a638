//! Pattern parsing for route paths
//!
//! A route path is a sequence of `/`-separated segments. A segment is either
//! literal text (`salary`) or a named parameter (`:year`).

/// A single classified segment of a route pattern
///
/// # Examples
///
/// ```
/// use sueldo_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("salary"), PatternSegment::Static("salary"));
/// assert_eq!(classify_segment(":year"), PatternSegment::Param("year"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Literal text that must match exactly
    Static(&'a str),
    /// Named parameter capturing one path segment
    Param(&'a str),
}

/// Classifies a segment into a pattern type
///
/// A lone `:` has no name and is treated as literal text.
pub fn classify_segment(segment: &str) -> PatternSegment<'_> {
    match segment.strip_prefix(':') {
        Some(name) if !name.is_empty() => PatternSegment::Param(name),
        _ => PatternSegment::Static(segment),
    }
}

/// Iterates over the classified, non-empty segments of a pattern
pub fn segments(pattern: &str) -> impl Iterator<Item = PatternSegment<'_>> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
}

/// Parses a pattern into its parameter names and priority
///
/// Returns `(params, priority)`.
pub fn parse_pattern(pattern: &str) -> (Vec<String>, usize) {
    let params: Vec<String> = segments(pattern)
        .filter_map(|seg| match seg {
            PatternSegment::Param(name) => Some(name.to_string()),
            PatternSegment::Static(_) => None,
        })
        .collect();

    let priority = calculate_priority(params.len());
    (params, priority)
}

/// Calculates matching priority (lower = checked earlier)
///
/// Fully literal routes get priority 0 and are always tried before any
/// route with parameters. Among routes with equal priority the table keeps
/// registration order.
pub fn calculate_priority(dynamic_count: usize) -> usize {
    dynamic_count
}

/// Collapses parameter names so `/users/:id` and `/users/:uid` compare equal
///
/// Two routes with the same shape would shadow each other.
///
/// ```
/// use sueldo_router::route::pattern::pattern_shape;
///
/// assert_eq!(pattern_shape("/users/:id"), pattern_shape("/users/:uid"));
/// assert_ne!(pattern_shape("/users/:id"), pattern_shape("/users/new"));
/// ```
pub fn pattern_shape(pattern: &str) -> String {
    let shape = segments(pattern)
        .map(|seg| match seg {
            PatternSegment::Static(text) => text,
            PatternSegment::Param(_) => ":",
        })
        .collect::<Vec<_>>()
        .join("/");

    format!("/{}", shape)
}
