//! # Sueldo Router
//!
//! Client-side navigation for the sueldo calculator: a static route table
//! mapping URL paths to page components, and a navigator that keeps a
//! history stack in sync with the mounted page.
//!
//! - Literal routes (`/salary`) and named parameters (`/salary/:year`)
//! - Most-specific-first matching, registration order breaks ties
//! - Name ↔ path lookup for programmatic navigation
//! - Web (history API) and hash history strategies under a base path
//! - Construction-time validation: no duplicate paths or names
//!
//! ## Example
//!
//! ```
//! use sueldo_router::{MemoryHistory, Navigator, Route, RouteTable, RouterConfig};
//!
//! let table = RouteTable::builder()
//!     .with_route(Route::new("/", "home", "HomeView"))
//!     .with_route(Route::new("/salary", "salary", "SalaryPage"))
//!     .build()
//!     .unwrap();
//!
//! let config = RouterConfig::new().with_base_path("/app");
//! let mut navigator = Navigator::new(table, config, MemoryHistory::new("/app/"));
//!
//! let resolved = navigator.navigate_by_name("salary", &Default::default()).unwrap();
//! assert_eq!(*resolved.component(), "SalaryPage");
//! assert_eq!(navigator.location(), "/app/salary");
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

pub mod config;
pub mod error;
pub mod history;
pub mod navigator;
pub mod path;
pub mod route;

pub use config::RouterConfig;
pub use error::{Result, RouterError};
pub use history::{History, HistoryMode, MemoryHistory};
pub use navigator::Navigator;
pub use path::{is_valid_path, normalize_path};
pub use route::Route;

// ============================================================================
// Route Matching Result
// ============================================================================

/// Result of matching a path against the table
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, C> {
    /// The matched route
    pub route: &'a Route<C>,
    /// Canonical path of the match, spelled the way the route registers it
    pub path: String,
    /// Extracted parameters from the path
    pub params: HashMap<String, String>,
}

impl<'a, C> RouteMatch<'a, C> {
    /// The component to mount for this match
    pub fn component(&self) -> &'a C {
        &self.route.component
    }

    /// The name of the matched route
    pub fn name(&self) -> &'a str {
        &self.route.name
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Ordered, immutable set of route entries
///
/// Only obtainable through [`RouteTableBuilder::build`], which guarantees
/// unique names, unique paths, and canonical patterns.
#[derive(Debug, Clone)]
pub struct RouteTable<C> {
    /// Entries in registration order
    routes: Vec<Route<C>>,
    /// Indexes into `routes`, sorted by priority (stable)
    match_order: Vec<usize>,
    /// Name → index into `routes`
    by_name: HashMap<String, usize>,
    /// Whether uniqueness was checked ignoring ASCII case
    case_insensitive: bool,
}

impl<C> RouteTable<C> {
    /// Starts an empty table builder
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder::new()
    }

    /// Matches a canonical path against all routes and returns the first match
    ///
    /// Routes are checked in priority order (literal before dynamic), ties in
    /// registration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sueldo_router::{Route, RouteTable};
    ///
    /// let table = RouteTable::builder()
    ///     .with_route(Route::new("/salary/:year", "salary.year", 1))
    ///     .with_route(Route::new("/salary/summary", "salary.summary", 2))
    ///     .build()
    ///     .unwrap();
    ///
    /// // The literal route wins although it was registered second
    /// let found = table.match_path("/salary/summary", false).unwrap();
    /// assert_eq!(*found.component(), 2);
    /// ```
    pub fn match_path(&self, path: &str, case_insensitive: bool) -> Option<RouteMatch<'_, C>> {
        self.match_order.iter().find_map(|&idx| {
            let route = &self.routes[idx];
            route
                .matches_with_options(path, case_insensitive)
                .map(|params| {
                    debug!(path, route = %route.name, "matched route");
                    let canonical = route
                        .generate_path(&params)
                        .unwrap_or_else(|_| path.to_string());
                    RouteMatch {
                        route,
                        path: canonical,
                        params,
                    }
                })
        })
    }

    /// Gets a route by its name
    pub fn get_by_name(&self, name: &str) -> Option<&Route<C>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Whether the table was validated for case-insensitive matching
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns all routes in registration order
    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder that validates entries when the table is built
///
/// # Examples
///
/// ```
/// use sueldo_router::{Route, RouteTable, RouterError};
///
/// let err = RouteTable::builder()
///     .with_route(Route::new("/salary", "salary", ()))
///     .with_route(Route::new("/salary-data", "salary", ()))
///     .build()
///     .unwrap_err();
///
/// assert_eq!(err, RouterError::DuplicateName { name: "salary".to_string() });
/// ```
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<C> {
    routes: Vec<Route<C>>,
    case_insensitive: bool,
}

impl<C> RouteTableBuilder<C> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            case_insensitive: false,
        }
    }

    /// Appends a route entry
    pub fn with_route(mut self, route: Route<C>) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends multiple route entries in order
    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route<C>>,
    {
        self.routes.extend(routes);
        self
    }

    /// Treats paths differing only in ASCII case as duplicates
    ///
    /// Set this when the navigator will match case-insensitively, otherwise
    /// `/Salary` and `/salary` would shadow each other at runtime.
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Validates the entries and freezes them into a table
    ///
    /// Fails on the first non-canonical path, duplicate path, or duplicate
    /// name, in registration order.
    pub fn build(self) -> Result<RouteTable<C>> {
        let mut by_name = HashMap::with_capacity(self.routes.len());
        let mut shapes = HashSet::with_capacity(self.routes.len());

        for (idx, route) in self.routes.iter().enumerate() {
            if !is_valid_path(&route.pattern) {
                return Err(RouterError::InvalidPath {
                    path: route.pattern.clone(),
                });
            }

            let shape = route::pattern_shape(&route.pattern);
            let shape = if self.case_insensitive {
                shape.to_ascii_lowercase()
            } else {
                shape
            };
            if !shapes.insert(shape) {
                return Err(RouterError::DuplicatePath {
                    path: route.pattern.clone(),
                });
            }

            if by_name.insert(route.name.clone(), idx).is_some() {
                return Err(RouterError::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        let mut match_order: Vec<usize> = (0..self.routes.len()).collect();
        match_order.sort_by_key(|&idx| self.routes[idx].priority);

        debug!(routes = self.routes.len(), "route table built");

        Ok(RouteTable {
            routes: self.routes,
            match_order,
            by_name,
            case_insensitive: self.case_insensitive,
        })
    }
}

impl<C> Default for RouteTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .with_route(Route::new("/", "home", "home"))
            .with_route(Route::new("/salary", "salary", "salary"))
            .with_route(Route::new("/salary/:year", "salary.year", "salary-year"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_routes_keep_registration_order() {
        let table = table();
        let names: Vec<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["home", "salary", "salary.year"]);
    }

    #[test]
    fn test_match_path() {
        let table = table();
        assert_eq!(*table.match_path("/", false).unwrap().component(), "home");
        assert_eq!(*table.match_path("/salary", false).unwrap().component(), "salary");

        let found = table.match_path("/salary/2024", false).unwrap();
        assert_eq!(found.name(), "salary.year");
        assert_eq!(found.params.get("year"), Some(&"2024".to_string()));

        assert!(table.match_path("/fonasa", false).is_none());
    }

    #[test]
    fn test_match_path_reports_registered_spelling() {
        let table = table();
        assert_eq!(table.match_path("/SALARY", true).unwrap().path, "/salary");
        assert_eq!(table.match_path("/Salary/2024", true).unwrap().path, "/salary/2024");
        assert!(!table.is_case_insensitive());
    }

    #[test]
    fn test_get_by_name() {
        let table = table();
        assert_eq!(table.get_by_name("salary").unwrap().pattern, "/salary");
        assert!(table.get_by_name("fonasa").is_none());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::builder()
            .with_route(Route::new("/fonasa", "fonasa", ()))
            .with_route(Route::new("/fonasa", "fonasa-2", ()))
            .build()
            .unwrap_err();
        assert_eq!(err, RouterError::DuplicatePath { path: "/fonasa".to_string() });
    }

    #[test]
    fn test_same_shape_params_rejected() {
        let err = RouteTable::builder()
            .with_route(Route::new("/salary/:year", "a", ()))
            .with_route(Route::new("/salary/:month", "b", ()))
            .build()
            .unwrap_err();
        assert!(matches!(err, RouterError::DuplicatePath { .. }));
    }

    #[test]
    fn test_case_insensitive_duplicate_rejected() {
        let builder = RouteTable::builder()
            .with_route(Route::new("/Fonasa", "a", ()))
            .with_route(Route::new("/fonasa", "b", ()));

        assert!(builder.clone().build().is_ok());
        assert!(builder.with_case_sensitivity(true).build().is_err());
    }

    #[test]
    fn test_invalid_path_rejected() {
        for path in ["", "salary", "/salary/", "/salary//data"] {
            let err = RouteTable::builder()
                .with_route(Route::new(path, "x", ()))
                .build()
                .unwrap_err();
            assert_eq!(err, RouterError::InvalidPath { path: path.to_string() });
        }
    }

    #[test]
    fn test_empty_table() {
        let table: RouteTable<()> = RouteTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert!(table.match_path("/", false).is_none());
    }
}
