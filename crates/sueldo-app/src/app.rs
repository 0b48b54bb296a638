//! Application shell
//!
//! Owns the single navigator and the outlet the active page is mounted
//! into. Navigation events are handled one at a time; each one replaces
//! whatever the previous one mounted.

use std::collections::HashMap;

use anyhow::{Context, Result};
use maud::{html, Markup, DOCTYPE};
use sueldo_router::{History, MemoryHistory, Navigator, RouterError};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::pages::{PageId, PageRef};
use crate::routes::build_table;

/// What is currently mounted in the outlet
#[derive(Debug, Clone)]
pub enum Outlet {
    /// A registered page
    Page(PageRef),
    /// The address bar holds a URL no route matches
    NotFound { location: String },
}

impl Outlet {
    pub fn page_id(&self) -> Option<PageId> {
        match self {
            Outlet::Page(page) => Some(page.id()),
            Outlet::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outlet::NotFound { .. })
    }
}

/// A navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Link activation with a route path (base path not included)
    Link(String),
    /// Programmatic navigation by route name
    Named {
        name: String,
        params: HashMap<String, String>,
    },
    Back,
    Forward,
    /// Re-resolve the current location (page reload)
    Reload,
}

impl NavigationEvent {
    pub fn named(name: impl Into<String>) -> Self {
        NavigationEvent::Named {
            name: name.into(),
            params: HashMap::new(),
        }
    }

    /// Whether the address bar already changed before this event was handled
    ///
    /// Such events cannot be rejected, so an unmatched location mounts the
    /// not-found view instead of keeping the previous page.
    fn is_history_driven(&self) -> bool {
        matches!(
            self,
            NavigationEvent::Back | NavigationEvent::Forward | NavigationEvent::Reload
        )
    }
}

/// The host application
pub struct App<H = MemoryHistory> {
    navigator: Navigator<PageRef, H>,
    outlet: Outlet,
}

impl App<MemoryHistory> {
    /// Boots the application with an in-memory history at `url`
    pub fn at(config: &AppConfig, url: impl Into<String>) -> Result<Self> {
        Self::bootstrap(config, MemoryHistory::new(url))
    }
}

impl<H: History> App<H> {
    /// Builds the route table and navigator, then mounts the page for the
    /// history's current location (initial load)
    pub fn bootstrap(config: &AppConfig, history: H) -> Result<Self> {
        let table = build_table(config.routing.case_insensitive)
            .context("Failed to build route table")?;
        let navigator = Navigator::new(table, config.routing.clone(), history);

        let outlet = match navigator.current() {
            Ok(resolved) => Outlet::Page(*resolved.component()),
            Err(err) => {
                warn!(location = navigator.location(), %err, "initial location not routable");
                Outlet::NotFound {
                    location: navigator.location().to_string(),
                }
            }
        };

        info!(
            routes = navigator.table().len(),
            location = navigator.location(),
            "application started"
        );

        Ok(Self { navigator, outlet })
    }

    /// The navigator, for children that need to build links or resolve paths
    pub fn navigator(&self) -> &Navigator<PageRef, H> {
        &self.navigator
    }

    pub fn outlet(&self) -> &Outlet {
        &self.outlet
    }

    /// Handles one navigation event and updates the outlet
    ///
    /// Rejected navigations (unregistered path, unknown name) return the
    /// error and keep the current page. History-driven events that land on
    /// an unmatched URL mount the not-found view and also return the error.
    pub fn handle(&mut self, event: NavigationEvent) -> std::result::Result<(), RouterError> {
        let history_driven = event.is_history_driven();

        let resolved = match &event {
            NavigationEvent::Link(path) => self.navigator.navigate(path).map(|m| *m.component()),
            NavigationEvent::Named { name, params } => self
                .navigator
                .navigate_by_name(name, params)
                .map(|m| *m.component()),
            NavigationEvent::Back => self.navigator.back().map(|m| *m.component()),
            NavigationEvent::Forward => self.navigator.forward().map(|m| *m.component()),
            NavigationEvent::Reload => self.navigator.current().map(|m| *m.component()),
        };

        match resolved {
            Ok(page) => {
                info!(page = page.title(), location = self.navigator.location(), "mounted");
                self.outlet = Outlet::Page(page);
                Ok(())
            }
            Err(err) => {
                let unroutable = matches!(
                    err,
                    RouterError::UnregisteredPath { .. } | RouterError::OutsideBase { .. }
                );
                if history_driven && unroutable {
                    warn!(location = self.navigator.location(), %err, "mounted not-found view");
                    self.outlet = Outlet::NotFound {
                        location: self.navigator.location().to_string(),
                    };
                } else {
                    warn!(?event, %err, "navigation rejected");
                }
                Err(err)
            }
        }
    }

    /// Title of whatever is mounted
    pub fn title(&self) -> &'static str {
        match &self.outlet {
            Outlet::Page(page) => page.title(),
            Outlet::NotFound { .. } => "Página no encontrada",
        }
    }

    /// Renders the full document: navigation plus the outlet
    pub fn render(&self) -> Markup {
        let active = self.outlet.page_id();
        let links: Vec<(String, &'static str, bool)> = self
            .navigator
            .table()
            .routes()
            .iter()
            .filter(|route| route.is_literal())
            .map(|route| {
                (
                    self.navigator.href(&route.pattern),
                    route.component.title(),
                    active == Some(route.component.id()),
                )
            })
            .collect();

        html! {
            (DOCTYPE)
            html lang="es" {
                head {
                    meta charset="utf-8";
                    title { (self.title()) " · Sueldo" }
                }
                body {
                    nav {
                        ul {
                            @for (href, label, is_active) in &links {
                                li {
                                    a.active[*is_active] href=(href) { (label) }
                                }
                            }
                        }
                    }
                    main #outlet {
                        (self.render_outlet())
                    }
                }
            }
        }
    }

    fn render_outlet(&self) -> Markup {
        match &self.outlet {
            Outlet::Page(page) => page.render(),
            Outlet::NotFound { location } => html! {
                section.page #not-found {
                    h1 { (self.title()) }
                    p { "No hay ninguna página en " code { (location) } "." }
                    a href=(self.navigator.href("/")) { "Volver al inicio" }
                }
            },
        }
    }
}
