//! # site-navigator
//!
//! Navigation menus for web applications.
//!
//! - **Page trees**: [`Page`] nodes with attributes, properties and children,
//!   built by hand or from declarative specs with [`PageFactory`].
//! - **Active state**: [`Navigation::is_active`] tells whether a page (or,
//!   optionally, any of its descendants) is the currently matched route.
//! - **Hrefs**: [`Navigation::get_href`] dispatches a `get.href` event to
//!   pluggable [`HrefListener`]s; the built-in [`RouteHrefListener`]
//!   assembles URLs through a [`UrlBuilder`].
//! - **Containers**: several named menus per application, kept in a
//!   registry that rejects duplicate and unknown names.
//!
//! Rendering menus into markup is left to the host's templates.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::json;
//! use site_navigator::{Navigation, PageFactory, RouteTable};
//!
//! let routes = RouteTable::new()
//!     .route("home", "/")
//!     .and_then(|t| t.route("post", "/posts/:id"))
//!     .unwrap();
//!
//! let menu = PageFactory::create(&json!({
//!     "name": "Home",
//!     "properties": { "route": "home" },
//!     "pages": [
//!         { "name": "First post", "properties": { "route": "post", "params": { "id": 1 } } }
//!     ]
//! }))
//! .unwrap();
//!
//! let mut nav = Navigation::default();
//! nav.set_router(Arc::new(routes.clone()));
//! nav.set_route_match(routes.match_path("/posts/1").unwrap());
//! nav.add_container("main", menu).unwrap();
//!
//! let home = &nav.get_container("main").unwrap().pages()[0];
//! assert!(nav.is_active(home));
//! assert_eq!(nav.get_href(&home.pages()[0]).unwrap(), "/posts/1");
//! ```
//!
//! ## Feature flags
//!
//! | Feature   | Default | Description                  |
//! |-----------|---------|------------------------------|
//! | `log`     | yes     | Log through the `log` crate  |
//! | `tracing` | no      | Log through `tracing` instead |

#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod container;
pub mod error;
pub mod event;
pub mod factory;
pub mod listener;
pub mod logging;
pub mod navigation;
pub mod page;
pub mod params;
pub mod router;

pub use cache::{CacheStats, PageCache};
pub use config::NavigationOptions;
pub use container::{Container, ContainerRegistry};
pub use error::{NavigationError, Result};
pub use event::{
    active_listener_fn, href_listener_fn, ActiveListener, EventManager, EventName,
    FnActiveListener, FnHrefListener, HrefListener, NavigationEvent,
};
pub use factory::PageFactory;
pub use listener::RouteHrefListener;
pub use navigation::Navigation;
pub use page::{Page, PageId, PageIter, PropertyMap, ROUTE_PROPERTY};
pub use params::{QueryParams, RouteParams};
pub use router::{normalize_path, RouteMatch, RouteTable, UrlBuilder};
