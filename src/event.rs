//! Navigation events and listeners.
//!
//! The navigation service exposes two extension channels:
//!
//! | Channel     | Listener trait     | Answer           | Used by                                      |
//! |-------------|--------------------|------------------|----------------------------------------------|
//! | `get.href`  | [`HrefListener`]   | `Option<String>` | [`Navigation::get_href`]                     |
//! | `is.active` | [`ActiveListener`] | `Option<bool>`   | [`Navigation::is_active`] (own-match step)   |
//!
//! Listeners live on an [`EventManager`], which is handed to the navigation
//! service at construction time. There is no process-wide manager.
//!
//! # Dispatch order
//!
//! Listeners run in **priority order** (higher [`priority`](HrefListener::priority)
//! first); listeners with equal priority run in registration order. The
//! **first** listener returning an answer wins and later listeners are not
//! called. For `get.href` an empty string counts as no answer.
//!
//! # Example
//!
//! ```
//! use site_navigator::{href_listener_fn, EventManager, Navigation, Page};
//!
//! let mut events = EventManager::new();
//! events.attach_href(href_listener_fn(|event| {
//!     Some(format!("/pages/{}", event.target().name()))
//! }));
//!
//! let nav = Navigation::new(events);
//! let page = Page::new("about");
//! assert_eq!(nav.get_href(&page).unwrap(), "/pages/about");
//! ```
//!
//! [`Navigation::get_href`]: crate::Navigation::get_href
//! [`Navigation::is_active`]: crate::Navigation::is_active

use crate::listener::RouteHrefListener;
use crate::navigation::Navigation;
use crate::page::Page;
use crate::trace_log;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// EventName
// ============================================================================

/// Names of the navigation event channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// `get.href`: resolve the href of a page.
    GetHref,
    /// `is.active`: decide whether a page itself matches the current route.
    IsActive,
}

impl EventName {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventName::GetHref => "get.href",
            EventName::IsActive => "is.active",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NavigationEvent
// ============================================================================

/// The value handed to listeners: which service is asking, about which page.
///
/// Created per dispatch and dropped afterwards.
pub struct NavigationEvent<'a> {
    name: EventName,
    navigation: &'a Navigation,
    target: &'a Page,
}

impl<'a> NavigationEvent<'a> {
    pub fn new(name: EventName, navigation: &'a Navigation, target: &'a Page) -> Self {
        Self {
            name,
            navigation,
            target,
        }
    }

    pub fn name(&self) -> EventName {
        self.name
    }

    /// The navigation service that raised the event.
    ///
    /// Listeners use it to reach the router and the current route match.
    pub fn navigation(&self) -> &'a Navigation {
        self.navigation
    }

    /// The page the event is about.
    pub fn target(&self) -> &'a Page {
        self.target
    }
}

impl fmt::Debug for NavigationEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationEvent")
            .field("name", &self.name)
            .field("target", &self.target.name())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Listener traits
// ============================================================================

/// Listener on the `get.href` channel.
///
/// Return `Some(href)` to claim the page, `None` to let the next listener
/// try.
pub trait HrefListener: Send + Sync + 'static {
    fn on_get_href(&self, event: &NavigationEvent<'_>) -> Option<String>;

    /// Listener name for debugging.
    fn name(&self) -> &'static str {
        "HrefListener"
    }

    /// Priority for execution order. Higher runs first. Default is 0.
    fn priority(&self) -> i32 {
        0
    }
}

/// Listener on the `is.active` channel.
///
/// Return `Some(active)` to decide whether the target page *itself* matches
/// the current route, `None` to fall back to comparing its `route`
/// property. Descendant recursion is still applied by the service.
pub trait ActiveListener: Send + Sync + 'static {
    fn on_is_active(&self, event: &NavigationEvent<'_>) -> Option<bool>;

    /// Listener name for debugging.
    fn name(&self) -> &'static str {
        "ActiveListener"
    }

    /// Priority for execution order. Higher runs first. Default is 0.
    fn priority(&self) -> i32 {
        0
    }
}

/// Create an href listener from a closure.
pub const fn href_listener_fn<F>(f: F) -> FnHrefListener<F>
where
    F: Fn(&NavigationEvent<'_>) -> Option<String> + Send + Sync + 'static,
{
    FnHrefListener { f }
}

/// Href listener created via [`href_listener_fn`].
pub struct FnHrefListener<F> {
    f: F,
}

impl<F> HrefListener for FnHrefListener<F>
where
    F: Fn(&NavigationEvent<'_>) -> Option<String> + Send + Sync + 'static,
{
    fn on_get_href(&self, event: &NavigationEvent<'_>) -> Option<String> {
        (self.f)(event)
    }
}

/// Create an active listener from a closure.
pub const fn active_listener_fn<F>(f: F) -> FnActiveListener<F>
where
    F: Fn(&NavigationEvent<'_>) -> Option<bool> + Send + Sync + 'static,
{
    FnActiveListener { f }
}

/// Active listener created via [`active_listener_fn`].
pub struct FnActiveListener<F> {
    f: F,
}

impl<F> ActiveListener for FnActiveListener<F>
where
    F: Fn(&NavigationEvent<'_>) -> Option<bool> + Send + Sync + 'static,
{
    fn on_is_active(&self, event: &NavigationEvent<'_>) -> Option<bool> {
        (self.f)(event)
    }
}

// ============================================================================
// EventManager
// ============================================================================

/// Ordered listener lists for both channels.
#[derive(Clone, Default)]
pub struct EventManager {
    href: Vec<Arc<dyn HrefListener>>,
    active: Vec<Arc<dyn ActiveListener>>,
}

impl EventManager {
    /// Create a manager with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with the built-in [`RouteHrefListener`] attached.
    pub fn with_defaults() -> Self {
        let mut events = Self::new();
        events.attach_href(RouteHrefListener::new());
        events
    }

    /// Attach a `get.href` listener.
    pub fn attach_href<L: HrefListener>(&mut self, listener: L) -> &mut Self {
        self.attach_href_arc(Arc::new(listener))
    }

    /// Attach a shared `get.href` listener.
    pub fn attach_href_arc(&mut self, listener: Arc<dyn HrefListener>) -> &mut Self {
        let pos = insert_position(&self.href, listener.priority(), |l| l.priority());
        trace_log!(
            "Attached '{}' listener '{}' at position {}",
            EventName::GetHref,
            listener.name(),
            pos
        );
        self.href.insert(pos, listener);
        self
    }

    /// Attach an `is.active` listener.
    pub fn attach_active<L: ActiveListener>(&mut self, listener: L) -> &mut Self {
        self.attach_active_arc(Arc::new(listener))
    }

    /// Attach a shared `is.active` listener.
    pub fn attach_active_arc(&mut self, listener: Arc<dyn ActiveListener>) -> &mut Self {
        let pos = insert_position(&self.active, listener.priority(), |l| l.priority());
        trace_log!(
            "Attached '{}' listener '{}' at position {}",
            EventName::IsActive,
            listener.name(),
            pos
        );
        self.active.insert(pos, listener);
        self
    }

    /// `get.href` listeners in dispatch order.
    pub fn href_listeners(&self) -> &[Arc<dyn HrefListener>] {
        &self.href
    }

    /// `is.active` listeners in dispatch order.
    pub fn active_listeners(&self) -> &[Arc<dyn ActiveListener>] {
        &self.active
    }

    pub fn listener_count(&self, name: EventName) -> usize {
        match name {
            EventName::GetHref => self.href.len(),
            EventName::IsActive => self.active.len(),
        }
    }

    /// Detach every listener of one channel.
    pub fn clear(&mut self, name: EventName) {
        match name {
            EventName::GetHref => self.href.clear(),
            EventName::IsActive => self.active.clear(),
        }
    }

    /// Run `get.href` listeners until one returns a non-empty href.
    pub fn dispatch_href(&self, event: &NavigationEvent<'_>) -> Option<String> {
        self.href.iter().find_map(|listener| {
            let result = listener
                .on_get_href(event)
                .filter(|href| !href.is_empty());
            trace_log!(
                "'{}' listener '{}' for page '{}': {:?}",
                event.name(),
                listener.name(),
                event.target().name(),
                result
            );
            result
        })
    }

    /// Run `is.active` listeners until one answers.
    pub fn dispatch_active(&self, event: &NavigationEvent<'_>) -> Option<bool> {
        self.active.iter().find_map(|listener| {
            let result = listener.on_is_active(event);
            trace_log!(
                "'{}' listener '{}' for page '{}': {:?}",
                event.name(),
                listener.name(),
                event.target().name(),
                result
            );
            result
        })
    }
}

/// Index after the last listener whose priority is >= `priority`.
fn insert_position<T: ?Sized>(
    listeners: &[Arc<T>],
    priority: i32,
    priority_of: impl Fn(&T) -> i32,
) -> usize {
    listeners
        .iter()
        .position(|l| priority_of(l.as_ref()) < priority)
        .unwrap_or(listeners.len())
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let href: Vec<&str> = self.href.iter().map(|l| l.name()).collect();
        let active: Vec<&str> = self.active.iter().map(|l| l.name()).collect();
        f.debug_struct("EventManager")
            .field("get.href", &href)
            .field("is.active", &active)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
