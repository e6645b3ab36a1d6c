//! The navigation service.
//!
//! [`Navigation`] ties the pieces together. It owns:
//!
//! - the [`ContainerRegistry`] of named menus;
//! - the current [`RouteMatch`] and an optional [`UrlBuilder`];
//! - the [`EventManager`] with the `get.href` / `is.active` listeners;
//! - two per-page memo caches, for `is_active` and `get_href`.
//!
//! # Request scope
//!
//! A `Navigation` is meant to live for one request: build it, set the route
//! match, render, drop it. Cached answers are never invalidated by a new
//! route match or by pages changing behind the service's back. The only
//! invalidations are:
//!
//! | Trigger                                        | Clears          |
//! |------------------------------------------------|-----------------|
//! | [`set_is_active_recursion`] with a new value   | active cache    |
//! | [`get_container_mut`]                          | both caches     |
//! | [`clear_caches`]                               | both caches     |
//!
//! Caches use `RefCell`, so a `Navigation` can be queried through `&self`
//! while pages borrowed from its own registry are examined. It is therefore
//! not `Sync`; give each concurrent request its own instance.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use site_navigator::{Container, Navigation, Page, RouteMatch, RouteTable};
//!
//! let routes = RouteTable::new()
//!     .route("home", "/")
//!     .and_then(|t| t.route("blog", "/blog"))
//!     .unwrap();
//!
//! let menu = Page::new("root")
//!     .with_route("home")
//!     .child(Page::new("Blog").with_route("blog"));
//!
//! let mut nav = Navigation::default();
//! nav.set_router(Arc::new(routes));
//! nav.add_container("main", Container::from(menu)).unwrap();
//! nav.set_route_match(RouteMatch::new("blog"));
//!
//! let root = &nav.get_container("main").unwrap().pages()[0];
//! assert!(nav.is_active(root));
//! assert_eq!(nav.get_href(&root.pages()[0]).unwrap(), "/blog");
//! ```
//!
//! [`set_is_active_recursion`]: Navigation::set_is_active_recursion
//! [`get_container_mut`]: Navigation::get_container_mut
//! [`clear_caches`]: Navigation::clear_caches

use crate::cache::{CacheStats, PageCache};
use crate::config::NavigationOptions;
use crate::container::{Container, ContainerRegistry};
use crate::error::{NavigationError, Result};
use crate::event::{EventManager, EventName, NavigationEvent};
use crate::page::Page;
use crate::router::{RouteMatch, UrlBuilder};
use crate::{debug_log, error_log, trace_log};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Navigation service: container registry plus memoized page queries.
pub struct Navigation {
    containers: ContainerRegistry,
    events: EventManager,
    router: Option<Arc<dyn UrlBuilder>>,
    route_match: Option<RouteMatch>,
    is_active_recursion: bool,
    active_cache: RefCell<PageCache<bool>>,
    href_cache: RefCell<PageCache<String>>,
}

impl Navigation {
    /// Create a service dispatching through `events`.
    ///
    /// Recursion is enabled and the caches are unbounded.
    pub fn new(events: EventManager) -> Self {
        Self {
            containers: ContainerRegistry::new(),
            events,
            router: None,
            route_match: None,
            is_active_recursion: true,
            active_cache: RefCell::new(PageCache::new()),
            href_cache: RefCell::new(PageCache::new()),
        }
    }

    /// Builder-style: bound both caches to `capacity` entries (0 = unbounded).
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.active_cache = RefCell::new(PageCache::with_capacity(capacity));
        self.href_cache = RefCell::new(PageCache::with_capacity(capacity));
        self
    }

    /// Build a service from declarative options.
    ///
    /// Every configured container is built through the
    /// [`PageFactory`](crate::PageFactory); the first malformed spec aborts
    /// construction.
    pub fn from_options(options: &NavigationOptions, events: EventManager) -> Result<Self> {
        let mut nav =
            Self::new(events).with_cache_capacity(options.cache_capacity.unwrap_or_default());
        nav.is_active_recursion = options.is_active_recursion;
        for (name, container) in options.build_containers()? {
            nav.add_container(name, container)?;
        }
        Ok(nav)
    }

    // ========================================================================
    // Container registry
    // ========================================================================

    /// Register a container. Fails if `name` is taken; the registry is then
    /// left unchanged.
    pub fn add_container(
        &mut self,
        name: impl Into<String>,
        container: impl Into<Container>,
    ) -> Result<()> {
        self.containers.add(name, container.into())
    }

    pub fn get_container(&self, name: &str) -> Result<&Container> {
        self.containers.get(name)
    }

    /// Mutable access to a container.
    ///
    /// Both caches are cleared, since the caller may restructure the tree.
    pub fn get_container_mut(&mut self, name: &str) -> Result<&mut Container> {
        if self.containers.contains(name) {
            self.clear_caches();
        }
        self.containers.get_mut(name)
    }

    pub fn remove_container(&mut self, name: &str) -> Result<Container> {
        self.containers.remove(name)
    }

    pub fn has_container(&self, name: &str) -> bool {
        self.containers.contains(name)
    }

    pub fn containers(&self) -> &HashMap<String, Container> {
        self.containers.all()
    }

    /// Remove every container. Caches are kept.
    pub fn clear_containers(&mut self) {
        self.containers.clear();
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    pub fn route_match(&self) -> Option<&RouteMatch> {
        self.route_match.as_ref()
    }

    pub fn set_route_match(&mut self, route_match: RouteMatch) {
        self.route_match = Some(route_match);
    }

    pub fn clear_route_match(&mut self) {
        self.route_match = None;
    }

    pub fn router(&self) -> Option<&dyn UrlBuilder> {
        self.router.as_deref()
    }

    pub fn set_router(&mut self, router: Arc<dyn UrlBuilder>) {
        self.router = Some(router);
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    /// Mutable access to the listeners. Cached hrefs are kept.
    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    // ========================================================================
    // Active state
    // ========================================================================

    pub fn is_active_recursion(&self) -> bool {
        self.is_active_recursion
    }

    /// Toggle descendant recursion for [`is_active`](Self::is_active).
    ///
    /// Changing the value clears the active cache; setting the current value
    /// again is a no-op.
    pub fn set_is_active_recursion(&mut self, recursion: bool) {
        if self.is_active_recursion == recursion {
            return;
        }
        self.is_active_recursion = recursion;
        self.active_cache.borrow_mut().clear();
    }

    /// Whether `page` represents the current route.
    ///
    /// With recursion enabled a page is also active when any descendant, at
    /// any depth, is active. Descendants are evaluated children-before-parent
    /// and each gets its own cache entry along the way.
    pub fn is_active(&self, page: &Page) -> bool {
        let cached = self.active_cache.borrow_mut().get(page.id());
        if let Some(active) = cached {
            return active;
        }

        let active = self.evaluate_active(page);
        trace_log!("Page '{}' {} active: {}", page.name(), page.id(), active);
        self.active_cache.borrow_mut().insert(page.id(), active);
        active
    }

    fn evaluate_active(&self, page: &Page) -> bool {
        let Some(route_match) = &self.route_match else {
            return false;
        };

        let event = NavigationEvent::new(EventName::IsActive, self, page);
        let matched = self
            .events
            .dispatch_active(&event)
            .unwrap_or_else(|| page.route() == Some(route_match.matched_route_name()));
        if matched {
            return true;
        }

        self.is_active_recursion
            && page
                .descendants_post_order()
                .into_iter()
                .any(|descendant| self.is_active(descendant))
    }

    // ========================================================================
    // Hrefs
    // ========================================================================

    /// Resolve the href of `page` through the `get.href` listeners.
    ///
    /// Successful results are cached per page. A failure caches nothing, so
    /// attaching a listener and asking again re-runs resolution.
    pub fn get_href(&self, page: &Page) -> Result<String> {
        let cached = self.href_cache.borrow_mut().get(page.id());
        if let Some(href) = cached {
            return Ok(href);
        }

        let event = NavigationEvent::new(EventName::GetHref, self, page);
        match self.events.dispatch_href(&event) {
            Some(href) => {
                debug_log!("Resolved href for page '{}': {}", page.name(), href);
                self.href_cache.borrow_mut().insert(page.id(), href.clone());
                Ok(href)
            }
            None => {
                error_log!(
                    "No '{}' listener resolved page '{}' ({} listeners)",
                    EventName::GetHref,
                    page.name(),
                    self.events.listener_count(EventName::GetHref)
                );
                Err(NavigationError::HrefResolution {
                    page: page.name().to_string(),
                })
            }
        }
    }

    // ========================================================================
    // Caches
    // ========================================================================

    /// Drop every cached active state and href.
    pub fn clear_caches(&self) {
        self.active_cache.borrow_mut().clear();
        self.href_cache.borrow_mut().clear();
    }

    pub fn active_cache_stats(&self) -> CacheStats {
        *self.active_cache.borrow().stats()
    }

    pub fn href_cache_stats(&self) -> CacheStats {
        *self.href_cache.borrow().stats()
    }
}

impl Default for Navigation {
    /// A service with the built-in [`RouteHrefListener`](crate::RouteHrefListener).
    fn default() -> Self {
        Self::new(EventManager::with_defaults())
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("containers", &self.containers.len())
            .field("events", &self.events)
            .field("route_match", &self.route_match)
            .field("has_router", &self.router.is_some())
            .field("is_active_recursion", &self.is_active_recursion)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
