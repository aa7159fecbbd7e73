//! Integration tests for deep-link routing against the static catalog.

use obscura::content::studio_services;
use obscura::models::slug;
use obscura::services::router::{SelectionRouter, SERVICES_PATH};
use obscura::tui::services_view::{active_view, ViewKind};

#[test]
fn every_catalog_title_round_trips_through_its_slug() {
    let strip = studio_services().unwrap();
    let router = SelectionRouter::new(SERVICES_PATH);

    for service in &strip {
        let resolved = router
            .resolve(&slug(&service.title), &strip)
            .unwrap_or_else(|| panic!("slug for '{}' did not resolve", service.title));
        assert_eq!(resolved.title, service.title);
    }
}

#[test]
fn wedding_deep_link_resolves_to_its_record() {
    let strip = studio_services().unwrap();
    let router = SelectionRouter::new("/services/wedding-engagement");

    assert_eq!(router.selection(), Some("wedding-engagement"));
    let service = router.resolve("wedding-engagement", &strip).unwrap();
    assert_eq!(service.title, "Wedding & Engagement");
}

#[test]
fn unknown_slug_lands_in_not_found_detail_state() {
    let strip = studio_services().unwrap();
    let router = SelectionRouter::new("/services/unknown-x");

    // The selection is present (the detail view renders), but resolution
    // fails into the fallback rather than erroring
    assert_eq!(router.selection(), Some("unknown-x"));
    assert_eq!(active_view(router.selection()), ViewKind::Detail);
    assert!(router.resolve("unknown-x", &strip).is_none());
}

#[test]
fn opening_portrait_pushes_route_and_back_restores_carousel() {
    let strip = studio_services().unwrap();
    let mut router = SelectionRouter::new(SERVICES_PATH);

    let portrait = strip.find_by_slug("portrait").unwrap();
    router.open(portrait);
    assert_eq!(router.current_path(), "/services/portrait");
    assert_eq!(router.selection(), Some("portrait"));

    assert!(router.navigate_back());
    assert_eq!(router.current_path(), SERVICES_PATH);
    assert_eq!(router.selection(), None);
    assert_eq!(active_view(router.selection()), ViewKind::Carousel);
}

#[test]
fn close_then_back_restores_the_previous_selection() {
    let strip = studio_services().unwrap();
    let mut router = SelectionRouter::new(SERVICES_PATH);

    let weddings = strip.find_by_slug("wedding-engagement").unwrap();
    router.open(weddings);
    router.close();
    assert_eq!(router.selection(), None);

    assert!(router.navigate_back());
    assert_eq!(router.selection(), Some("wedding-engagement"));
}

#[test]
fn external_navigation_matches_a_fresh_load_of_the_route() {
    let strip = studio_services().unwrap();
    let mut router = SelectionRouter::new(SERVICES_PATH);

    let portrait = strip.find_by_slug("portrait").unwrap();
    let commercial = strip.find_by_slug("commercial").unwrap();
    router.open(portrait);
    router.open(commercial);

    // Walk back through the stack: each stop equals what loading that
    // route directly would produce
    assert!(router.navigate_back());
    assert_eq!(
        router.selection(),
        SelectionRouter::new("/services/portrait").selection()
    );

    assert!(router.navigate_back());
    assert_eq!(router.selection(), SelectionRouter::new(SERVICES_PATH).selection());

    assert!(router.navigate_forward());
    assert_eq!(router.selection(), Some("portrait"));
}

#[test]
fn non_matching_routes_select_nothing() {
    for route in ["/", "/about", "/gallery", "/contact", "/servicesx", "/services/a/b"] {
        let router = SelectionRouter::new(route);
        assert_eq!(router.selection(), None, "route {route}");
        assert_eq!(active_view(router.selection()), ViewKind::Carousel);
    }
}

#[test]
fn exactly_one_view_is_visible_at_every_transition() {
    let strip = studio_services().unwrap();
    let mut router = SelectionRouter::new(SERVICES_PATH);

    assert_eq!(active_view(router.selection()), ViewKind::Carousel);

    router.open(strip.head());
    assert_eq!(active_view(router.selection()), ViewKind::Detail);

    router.close();
    assert_eq!(active_view(router.selection()), ViewKind::Carousel);

    router.navigate_back();
    assert_eq!(active_view(router.selection()), ViewKind::Detail);

    router.navigate_forward();
    assert_eq!(active_view(router.selection()), ViewKind::Carousel);
}
