//! The navigator: route table + history strategy + history backend
//!
//! One navigator is created at startup and owned by the application shell.
//! Every navigation request (initial load, link activation, back/forward,
//! programmatic call) goes through it and is resolved with the same
//! matching policy, so reload and back/forward land on the same component
//! the first visit did.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::RouterConfig;
use crate::error::{Result, RouterError};
use crate::history::{History, MemoryHistory};
use crate::path::normalize_path;
use crate::{RouteMatch, RouteTable};

/// How a successful navigation is written to the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Commit {
    Push,
    Replace,
}

/// Resolves paths against a shared route table and drives a history backend
#[derive(Debug, Clone)]
pub struct Navigator<C, H = MemoryHistory> {
    table: Arc<RouteTable<C>>,
    config: RouterConfig,
    history: H,
}

impl<C, H: History> Navigator<C, H> {
    /// Creates a navigator
    ///
    /// The configured base path is normalized. The history backend keeps
    /// whatever location it already holds; call [`Navigator::current`] to
    /// resolve it (initial load).
    ///
    /// Case-insensitive matching needs a table built with
    /// [`crate::RouteTableBuilder::with_case_sensitivity`]. Given a table
    /// validated case-sensitively, the navigator matches case-sensitively.
    pub fn new(table: impl Into<Arc<RouteTable<C>>>, config: RouterConfig, history: H) -> Self {
        let table = table.into();
        let mut config = config.normalized();
        if config.case_insensitive && !table.is_case_insensitive() {
            warn!("route table allows paths differing only in case; matching case-sensitively");
            config.case_insensitive = false;
        }
        info!(
            base_path = %config.base_path,
            history = ?config.history,
            "navigator initialized"
        );

        Self {
            table,
            config,
            history,
        }
    }

    pub fn table(&self) -> &Arc<RouteTable<C>> {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// The URL currently in the address bar
    pub fn location(&self) -> &str {
        self.history.location()
    }

    // ========================================================================
    // Resolution (no side effects)
    // ========================================================================

    /// Resolves a route path (base already stripped) to its route
    ///
    /// The path is normalized first, so `/salary/` resolves like `/salary`.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_, C>> {
        resolve_in(&self.table, &self.config, path)
    }

    /// Resolves a full URL as it appears in the address bar
    pub fn resolve_location(&self, url: &str) -> Result<RouteMatch<'_, C>> {
        resolve_location_in(&self.table, &self.config, url)
    }

    /// Resolves the history's current location
    pub fn current(&self) -> Result<RouteMatch<'_, C>> {
        self.resolve_location(self.history.location())
    }

    /// Resolves a registered name back to its route path
    pub fn path_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        self.table
            .get_by_name(name)
            .ok_or_else(|| RouterError::UnknownRouteName {
                name: name.to_string(),
            })?
            .generate_path(params)
    }

    /// Encodes a route path into a URL for the configured base and strategy
    pub fn href(&self, path: &str) -> String {
        self.config.history.encode(&self.config.base_path, path)
    }

    /// Builds the URL for a named route
    ///
    /// [`Navigator::resolve_location`] is the inverse of this.
    pub fn href_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        self.path_for(name, params).map(|path| self.href(&path))
    }

    // ========================================================================
    // Navigation (updates history)
    // ========================================================================

    /// Navigates to a route path, pushing a history entry
    ///
    /// Unregistered paths fail with [`RouterError::UnregisteredPath`] and
    /// leave the history untouched. Navigating to the current location does
    /// not add a duplicate entry.
    pub fn navigate(&mut self, path: &str) -> Result<RouteMatch<'_, C>> {
        self.commit(path, Commit::Push)
    }

    /// Navigates to a route path, replacing the current history entry
    pub fn replace(&mut self, path: &str) -> Result<RouteMatch<'_, C>> {
        self.commit(path, Commit::Replace)
    }

    /// Navigates to a named route
    ///
    /// Fails with [`RouterError::UnknownRouteName`] for names not in the
    /// table; the history is untouched in that case.
    pub fn navigate_by_name(
        &mut self,
        name: &str,
        params: &HashMap<String, String>,
    ) -> Result<RouteMatch<'_, C>> {
        let path = self.path_for(name, params)?;
        self.navigate(&path)
    }

    /// Moves through the history and resolves the landed-on location
    ///
    /// The move is kept even if the landed-on URL no longer resolves, the
    /// same way a browser keeps the URL after a pop.
    pub fn go(&mut self, delta: isize) -> Result<RouteMatch<'_, C>> {
        self.history.go(delta)?;
        debug!(delta, location = self.history.location(), "history traversal");
        resolve_location_in(&self.table, &self.config, self.history.location())
    }

    pub fn back(&mut self) -> Result<RouteMatch<'_, C>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<RouteMatch<'_, C>> {
        self.go(1)
    }

    fn commit(&mut self, path: &str, commit: Commit) -> Result<RouteMatch<'_, C>> {
        let resolved = resolve_in(&self.table, &self.config, path)?;
        let url = self
            .config
            .history
            .encode(&self.config.base_path, &resolved.path);

        if url == self.history.location() {
            debug!(url = %url, "already at location");
            return Ok(resolved);
        }

        info!(url = %url, route = %resolved.route.name, ?commit, "navigating");
        match commit {
            Commit::Push => self.history.push(url),
            Commit::Replace => self.history.replace(url),
        }

        Ok(resolved)
    }
}

fn resolve_in<'t, C>(
    table: &'t RouteTable<C>,
    config: &RouterConfig,
    path: &str,
) -> Result<RouteMatch<'t, C>> {
    let normalized = normalize_path(path);
    table
        .match_path(&normalized, config.case_insensitive)
        .ok_or_else(|| {
            debug!(path = %normalized, "no route matched");
            RouterError::UnregisteredPath {
                path: normalized.to_string(),
            }
        })
}

fn resolve_location_in<'t, C>(
    table: &'t RouteTable<C>,
    config: &RouterConfig,
    url: &str,
) -> Result<RouteMatch<'t, C>> {
    let path = config.history.decode(&config.base_path, url)?;
    resolve_in(table, config, &path)
}
