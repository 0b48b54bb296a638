//! # Sueldo
//!
//! Application shell for the sueldo calculator: the page components, the
//! route table that maps URL paths to them, and the [`App`] that owns the
//! navigator and mounts the active page into its outlet.
//!
//! ## Example
//!
//! ```
//! use sueldo_app::{App, AppConfig, NavigationEvent, PageId};
//!
//! let mut app = App::at(&AppConfig::default(), "/").unwrap();
//! app.handle(NavigationEvent::named("fonasa")).unwrap();
//!
//! assert_eq!(app.outlet().page_id(), Some(PageId::Fonasa));
//! assert_eq!(app.navigator().location(), "/fonasa");
//! ```

pub mod app;
pub mod config;
pub mod pages;
pub mod routes;

pub use app::{App, NavigationEvent, Outlet};
pub use config::AppConfig;
pub use pages::{Page, PageId, PageRef};
pub use routes::{app_routes, build_table};
