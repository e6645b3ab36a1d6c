//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::json;
use site_navigator::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Initialise `env_logger` once so `RUST_LOG=trace` shows service logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Route table used across the integration tests.
pub fn routes() -> RouteTable {
    RouteTable::new()
        .route("home", "/")
        .and_then(|t| t.route("blog", "/blog"))
        .and_then(|t| t.route("post", "/blog/:slug"))
        .and_then(|t| t.route("about", "/about"))
        .and_then(|t| t.route("team", "/about/team"))
        .expect("fixture routes are valid")
}

/// A three-level menu:
///
/// ```text
/// Home (home)
/// ├── Blog (blog)
/// │   └── Hello (post, slug=hello)
/// └── About (about)
///     └── Team (team)
/// ```
pub fn site_menu() -> Page {
    PageFactory::create(&json!({
        "name": "Home",
        "properties": { "route": "home" },
        "pages": [
            {
                "name": "Blog",
                "properties": { "route": "blog" },
                "pages": [
                    { "name": "Hello", "properties": { "route": "post", "params": { "slug": "hello" } } }
                ]
            },
            {
                "name": "About",
                "attributes": { "class": "about" },
                "properties": { "route": "about" },
                "pages": [{ "name": "Team", "properties": { "route": "team" } }]
            }
        ]
    }))
    .expect("fixture menu is valid")
}

/// A navigation service with the default listeners, the fixture routes and
/// the fixture menu registered as `main`.
pub fn navigation() -> Navigation {
    let mut nav = Navigation::default();
    nav.set_router(Arc::new(routes()));
    nav.add_container("main", site_menu())
        .expect("fresh registry accepts 'main'");
    nav
}

/// Find a page of the `main` container by name.
pub fn page<'a>(nav: &'a Navigation, name: &str) -> &'a Page {
    nav.get_container("main")
        .and_then(|c| {
            c.find_by_name(name).ok_or(NavigationError::ContainerNotFound {
                name: name.to_string(),
            })
        })
        .expect("fixture page exists")
}

/// An href listener that counts its invocations.
pub fn counting_listener(
    calls: Arc<AtomicUsize>,
    href: &'static str,
) -> impl HrefListener {
    href_listener_fn(move |_event| {
        calls.fetch_add(1, Ordering::SeqCst);
        Some(href.to_string())
    })
}
