//! Integration tests for active-state detection and the container registry.

mod common;

use common::*;
use site_navigator::*;

// ---- is_active ----

#[test]
fn test_page_matching_route_is_active() {
    init_logging();
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("about"));

    assert!(nav.is_active(page(&nav, "About")));
    assert!(!nav.is_active(page(&nav, "Blog")));
}

#[test]
fn test_matched_path_drives_active_state() {
    let mut nav = navigation();
    let matched = routes().match_path("/blog/hello").unwrap();
    nav.set_route_match(matched);

    assert!(nav.is_active(page(&nav, "Hello")));
    assert!(nav.is_active(page(&nav, "Blog")));
    assert!(nav.is_active(page(&nav, "Home")));
    assert!(!nav.is_active(page(&nav, "About")));
}

#[test]
fn test_subtree_without_match_is_inactive() {
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("team"));

    assert!(nav.is_active_recursion());
    assert!(!nav.is_active(page(&nav, "Blog")));
    assert!(nav.is_active(page(&nav, "About")));
    assert!(nav.is_active(page(&nav, "Home")));
}

#[test]
fn test_parent_not_active_without_recursion() {
    let mut nav = navigation();
    nav.set_is_active_recursion(false);
    nav.set_route_match(RouteMatch::new("team"));

    assert!(nav.is_active(page(&nav, "Team")));
    assert!(!nav.is_active(page(&nav, "About")));
    assert!(!nav.is_active(page(&nav, "Home")));
}

#[test]
fn test_unchanged_recursion_flag_keeps_stale_cache() {
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("team"));
    assert!(nav.is_active(page(&nav, "About")));

    // A new match does not invalidate cached answers.
    nav.set_route_match(RouteMatch::new("blog"));
    nav.set_is_active_recursion(true);
    assert!(nav.is_active(page(&nav, "About")));

    nav.set_is_active_recursion(false);
    assert!(!nav.is_active(page(&nav, "About")));
    assert!(nav.is_active(page(&nav, "Blog")));
}

#[test]
fn test_active_state_survives_clone() {
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("blog"));
    let copy = page(&nav, "Blog").clone();

    assert!(nav.is_active(page(&nav, "Blog")));
    let hits_before = nav.active_cache_stats().hits;
    assert!(nav.is_active(&copy));
    assert_eq!(nav.active_cache_stats().hits, hits_before + 1);
}

#[test]
fn test_clear_caches_picks_up_new_route_match() {
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("blog"));
    assert!(!nav.is_active(page(&nav, "About")));

    nav.set_route_match(RouteMatch::new("about"));
    nav.clear_caches();
    assert!(nav.is_active(page(&nav, "About")));
}

// ---- container registry ----

#[test]
fn test_duplicate_container_keeps_original() {
    let mut nav = navigation();
    let original = page(&nav, "Home").id();

    let err = nav
        .add_container("main", Container::from(Page::new("Other")))
        .unwrap_err();
    assert!(matches!(err, NavigationError::DuplicateContainer { ref name } if name == "main"));
    assert_eq!(nav.get_container("main").unwrap().pages()[0].id(), original);
}

#[test]
fn test_missing_container_errors() {
    let mut nav = navigation();
    assert!(matches!(
        nav.remove_container("missing"),
        Err(NavigationError::ContainerNotFound { .. })
    ));
    assert!(matches!(
        nav.get_container("missing"),
        Err(NavigationError::ContainerNotFound { .. })
    ));
    assert!(nav.get_container_mut("missing").is_err());
    assert!(!nav.has_container("missing"));
}

#[test]
fn test_multiple_containers() {
    let mut nav = navigation();
    nav.add_container(
        "footer",
        vec![Page::new("Imprint"), Page::new("Privacy")],
    )
    .unwrap();

    assert_eq!(nav.containers().len(), 2);
    assert_eq!(nav.get_container("footer").unwrap().pages().len(), 2);

    let removed = nav.remove_container("footer").unwrap();
    assert_eq!(removed.pages()[0].name(), "Imprint");
    assert!(!nav.has_container("footer"));

    nav.clear_containers();
    assert!(nav.containers().is_empty());
}

#[test]
fn test_container_mutation_invalidates_answers() {
    let mut nav = navigation();
    nav.set_route_match(RouteMatch::new("about"));
    assert!(nav.is_active(page(&nav, "Home")));

    let about = page(&nav, "About").id();
    nav.get_container_mut("main")
        .unwrap()
        .remove_page(about)
        .expect("About is in the menu");

    assert!(!nav.is_active(page(&nav, "Home")));
}
