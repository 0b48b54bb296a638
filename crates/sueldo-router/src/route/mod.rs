//! Route module
//!
//! Contains the route entry type and the pure pattern helpers it is built on.

pub mod pattern;

use std::collections::HashMap;

use crate::error::{Result, RouterError};
use pattern::PatternSegment;

pub use pattern::{classify_segment, parse_pattern, pattern_shape};

/// A single `(path, name, component)` entry of the route table
///
/// `C` is whatever the host application uses to reference a renderable view.
/// The component is held by value, so an entry can never point at a view
/// that does not exist.
#[derive(Debug, Clone)]
pub struct Route<C> {
    /// URL pattern like `/salary` or `/salary/:year`
    pub pattern: String,
    /// Unique symbolic name used for programmatic navigation
    pub name: String,
    /// The view mounted into the outlet when this route is active
    pub component: C,
    /// Parameter names in pattern order
    pub params: Vec<String>,
    /// Matching priority (lower = checked earlier)
    pub priority: usize,
}

impl<C> Route<C> {
    /// Creates a route entry
    ///
    /// The path is not validated here; [`crate::RouteTable`] rejects
    /// non-canonical or duplicate paths when the table is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use sueldo_router::Route;
    ///
    /// let route = Route::new("/salary", "salary", "SalaryPage");
    /// assert_eq!(route.pattern, "/salary");
    /// assert!(route.params.is_empty());
    /// assert_eq!(route.priority, 0);
    /// ```
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        let pattern = path.into();
        let (params, priority) = parse_pattern(&pattern);

        Route {
            pattern,
            name: name.into(),
            component,
            params,
            priority,
        }
    }

    /// Whether the pattern has no parameters
    pub fn is_literal(&self) -> bool {
        self.params.is_empty()
    }

    /// Matches this route against a canonical path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a canonical path
    ///
    /// Walks pattern and path segments in lockstep. Literal segments must be
    /// equal, parameter segments capture exactly one path segment, and both
    /// sides must run out at the same time. Captured values are
    /// percent-decoded.
    pub fn matches_with_options(
        &self,
        path: &str,
        case_insensitive: bool,
    ) -> Option<HashMap<String, String>> {
        if self.is_literal() {
            let matches = if case_insensitive {
                self.pattern.eq_ignore_ascii_case(path)
            } else {
                self.pattern == path
            };
            return matches.then(HashMap::new);
        }

        let pattern_segments: Vec<PatternSegment<'_>> = pattern::segments(&self.pattern).collect();
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        fn match_segments(
            pattern_segments: &[PatternSegment<'_>],
            path_segments: &[&str],
            mut params: HashMap<String, String>,
            case_insensitive: bool,
        ) -> Option<HashMap<String, String>> {
            match (pattern_segments.split_first(), path_segments.split_first()) {
                (None, None) => Some(params),
                (None, Some(_)) | (Some(_), None) => None,
                (Some((PatternSegment::Param(name), rest)), Some((value, path_rest))) => {
                    let decoded = urlencoding::decode(value)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                    params.insert(name.to_string(), decoded);
                    match_segments(rest, path_rest, params, case_insensitive)
                }
                (Some((PatternSegment::Static(text), rest)), Some((value, path_rest))) => {
                    let matches = if case_insensitive {
                        text.eq_ignore_ascii_case(value)
                    } else {
                        text == value
                    };
                    if !matches {
                        return None;
                    }
                    match_segments(rest, path_rest, params, case_insensitive)
                }
            }
        }

        match_segments(&pattern_segments, &path_segments, HashMap::new(), case_insensitive)
    }

    /// Generates the path for this route by substituting parameters
    ///
    /// Parameter values are percent-encoded. Extra parameters are ignored. An
    /// empty value counts as missing, since it would collapse the segment and
    /// point at a different route.
    ///
    /// # Examples
    ///
    /// ```
    /// use sueldo_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/salary/:year", "salary.year", ());
    ///
    /// let mut params = HashMap::new();
    /// params.insert("year".to_string(), "2024".to_string());
    ///
    /// assert_eq!(route.generate_path(&params).unwrap(), "/salary/2024");
    /// assert!(route.generate_path(&HashMap::new()).is_err());
    /// ```
    pub fn generate_path(&self, params: &HashMap<String, String>) -> Result<String> {
        if self.is_literal() {
            return Ok(self.pattern.clone());
        }

        let segments = pattern::segments(&self.pattern)
            .map(|seg| match seg {
                PatternSegment::Static(text) => Ok(text.to_string()),
                PatternSegment::Param(param) => params
                    .get(param)
                    .filter(|value| !value.is_empty())
                    .map(|value| urlencoding::encode(value).into_owned())
                    .ok_or_else(|| RouterError::MissingParam {
                        name: self.name.clone(),
                        param: param.to_string(),
                    }),
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(format!("/{}", segments.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match_is_exact() {
        let route = Route::new("/salary", "salary", ());
        assert!(route.matches("/salary").is_some());
        assert!(route.matches("/salary-data").is_none());
        assert!(route.matches("/SALARY").is_none());
        assert!(route.matches_with_options("/SALARY", true).is_some());
    }

    #[test]
    fn test_root_matches_only_root() {
        let route = Route::new("/", "home", ());
        assert!(route.matches("/").is_some());
        assert!(route.matches("/fonasa").is_none());
    }

    #[test]
    fn test_dynamic_match_captures_and_decodes() {
        let route = Route::new("/salary/:year/:label", "salary.label", ());
        let params = route.matches("/salary/2024/aguinaldo%20junio").unwrap();
        assert_eq!(params.get("year"), Some(&"2024".to_string()));
        assert_eq!(params.get("label"), Some(&"aguinaldo junio".to_string()));
    }

    #[test]
    fn test_dynamic_match_requires_same_length() {
        let route = Route::new("/salary/:year", "salary.year", ());
        assert!(route.matches("/salary").is_none());
        assert!(route.matches("/salary/2024/extra").is_none());
        assert!(route.matches("/fonasa/2024").is_none());
    }

    #[test]
    fn test_generate_path_encodes_values() {
        let route = Route::new("/salary/:label", "salary.label", ());
        let mut params = HashMap::new();
        params.insert("label".to_string(), "medio aguinaldo".to_string());
        assert_eq!(route.generate_path(&params).unwrap(), "/salary/medio%20aguinaldo");
    }

    #[test]
    fn test_generate_path_missing_param() {
        let route = Route::new("/salary/:year", "salary.year", ());
        let err = route.generate_path(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            RouterError::MissingParam {
                name: "salary.year".to_string(),
                param: "year".to_string(),
            }
        );
    }

    #[test]
    fn test_generate_path_rejects_empty_value() {
        let route = Route::new("/salary/:label", "salary.label", ());
        let mut params = HashMap::new();
        params.insert("label".to_string(), String::new());
        assert_eq!(
            route.generate_path(&params),
            Err(RouterError::MissingParam {
                name: "salary.label".to_string(),
                param: "label".to_string(),
            })
        );
    }

    #[test]
    fn test_generate_then_match_round_trips() {
        let route = Route::new("/salary/:label", "salary.label", ());
        let mut params = HashMap::new();
        params.insert("label".to_string(), "horas/extra".to_string());
        let path = route.generate_path(&params).unwrap();
        assert_eq!(route.matches(&path), Some(params));
    }
}
