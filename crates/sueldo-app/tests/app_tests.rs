//! Integration tests for the application shell
//!
//! Covers bootstrap at every registered URL, navigation events, the
//! not-found outlet, and rendering under different base paths and history
//! strategies.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sueldo_app::{App, AppConfig, NavigationEvent, PageId};
use sueldo_router::{HistoryMode, RouterError};

fn config(base: &str, history: HistoryMode) -> AppConfig {
    let mut config = AppConfig::default().with_base_url(Some(base));
    config.routing.history = history;
    config
}

#[rstest]
#[case("/", PageId::Home)]
#[case("/salary", PageId::Salary)]
#[case("/irpf-credit-for-rent", PageId::IrpfCreditForRent)]
#[case("/fonasa", PageId::Fonasa)]
#[case("/salary-data", PageId::SalaryData)]
fn test_deep_link_mounts_page(#[case] url: &str, #[case] expected: PageId) {
    let app = App::at(&AppConfig::default(), url).unwrap();
    assert_eq!(app.outlet().page_id(), Some(expected));
}

#[rstest]
#[case("home", PageId::Home)]
#[case("salary", PageId::Salary)]
#[case("irpf-credit-for-rent", PageId::IrpfCreditForRent)]
#[case("fonasa", PageId::Fonasa)]
#[case("salary-data", PageId::SalaryData)]
fn test_named_navigation_round_trips_through_reload(
    #[case] name: &str,
    #[case] expected: PageId,
    #[values(HistoryMode::Web, HistoryMode::Hash)] history: HistoryMode,
) {
    let config = config("/calculadora", history);
    let start = history.encode("/calculadora", "/");
    let mut app = App::at(&config, start).unwrap();

    app.handle(NavigationEvent::named(name)).unwrap();
    assert_eq!(app.outlet().page_id(), Some(expected));

    // Booting a fresh app at the written URL mounts the same page
    let url = app.navigator().location().to_string();
    let reloaded = App::at(&config, url).unwrap();
    assert_eq!(reloaded.outlet().page_id(), Some(expected));
}

#[test]
fn test_link_then_back_and_forward() {
    let mut app = App::at(&AppConfig::default(), "/").unwrap();

    app.handle(NavigationEvent::Link("/salary".to_string())).unwrap();
    app.handle(NavigationEvent::Link("/fonasa".to_string())).unwrap();
    assert_eq!(app.outlet().page_id(), Some(PageId::Fonasa));

    app.handle(NavigationEvent::Back).unwrap();
    assert_eq!(app.outlet().page_id(), Some(PageId::Salary));
    assert_eq!(app.navigator().location(), "/salary");

    app.handle(NavigationEvent::Forward).unwrap();
    assert_eq!(app.outlet().page_id(), Some(PageId::Fonasa));

    app.handle(NavigationEvent::Reload).unwrap();
    assert_eq!(app.outlet().page_id(), Some(PageId::Fonasa));
}

#[test]
fn test_back_past_start_keeps_page() {
    let mut app = App::at(&AppConfig::default(), "/salary").unwrap();
    let err = app.handle(NavigationEvent::Back).unwrap_err();
    assert_eq!(err, RouterError::HistoryOutOfRange { delta: -1 });
    assert_eq!(app.outlet().page_id(), Some(PageId::Salary));
}

#[test]
fn test_unknown_route_name_is_an_error() {
    let mut app = App::at(&AppConfig::default(), "/").unwrap();
    let err = app.handle(NavigationEvent::named("aguinaldo")).unwrap_err();

    assert_eq!(
        err,
        RouterError::UnknownRouteName {
            name: "aguinaldo".to_string()
        }
    );
    assert_eq!(app.outlet().page_id(), Some(PageId::Home));
    assert_eq!(app.navigator().location(), "/");
}

#[test]
fn test_deep_link_to_unregistered_path_shows_not_found() {
    let app = App::at(&AppConfig::default(), "/does-not-exist").unwrap();
    assert!(app.outlet().is_not_found());

    let html = app.render().into_string();
    assert!(html.contains("Página no encontrada"));
    assert!(html.contains("<code>/does-not-exist</code>"));
}

#[test]
fn test_deep_link_outside_base_shows_not_found() {
    let config = config("/calculadora", HistoryMode::Web);
    let app = App::at(&config, "/salary").unwrap();
    assert!(app.outlet().is_not_found());
}

#[test]
fn test_recovering_from_not_found() {
    let mut app = App::at(&AppConfig::default(), "/does-not-exist").unwrap();
    app.handle(NavigationEvent::named("home")).unwrap();
    assert_eq!(app.outlet().page_id(), Some(PageId::Home));

    // Going back lands on the unregistered URL again
    let err = app.handle(NavigationEvent::Back).unwrap_err();
    assert!(matches!(err, RouterError::UnregisteredPath { .. }));
    assert!(app.outlet().is_not_found());
}

#[test]
fn test_render_navigation_links() {
    let config = config("/calculadora", HistoryMode::Hash);
    let app = App::at(&config, "/calculadora/#/irpf-credit-for-rent").unwrap();
    let html = app.render().into_string();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Crédito IRPF por alquiler · Sueldo</title>"));
    for href in [
        "/calculadora/#/",
        "/calculadora/#/salary",
        "/calculadora/#/irpf-credit-for-rent",
        "/calculadora/#/fonasa",
        "/calculadora/#/salary-data",
    ] {
        assert!(html.contains(&format!(r#"href="{}""#, href)), "missing {href}");
    }
    assert!(html.contains(r#"class="active""#));
    assert_eq!(html.matches(r#"class="active""#).count(), 1);
}
