//! Built-in `get.href` listener.
//!
//! [`RouteHrefListener`] turns a page's properties into an href:
//!
//! 1. a string `uri` property is used verbatim;
//! 2. otherwise the `route` property is assembled through the navigation's
//!    [`UrlBuilder`](crate::UrlBuilder) with the page's `params` object
//!    (laid over the current match's parameters when `reuse_matched_params`
//!    is `true`), then the `query` object and the `fragment` string are
//!    appended.
//!
//! A page with neither property, a navigation without a router, or a router
//! error all leave the page unclaimed so later listeners get a chance.

use crate::event::{HrefListener, NavigationEvent};
use crate::page::Page;
use crate::params::{QueryParams, RouteParams};
use crate::{debug_log, warn_log};
use serde_json::Value;

const URI_PROPERTY: &str = "uri";
const PARAMS_PROPERTY: &str = "params";
const QUERY_PROPERTY: &str = "query";
const FRAGMENT_PROPERTY: &str = "fragment";
const REUSE_PARAMS_PROPERTY: &str = "reuse_matched_params";

/// Resolves hrefs from `uri` / `route` page properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteHrefListener;

impl RouteHrefListener {
    pub fn new() -> Self {
        Self
    }

    fn route_params(event: &NavigationEvent<'_>, page: &Page) -> RouteParams {
        let own = match page.property(PARAMS_PROPERTY) {
            Some(Value::Object(object)) => RouteParams::from_json(object),
            _ => RouteParams::new(),
        };
        let reuse = page
            .property(REUSE_PARAMS_PROPERTY)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        match event.navigation().route_match() {
            Some(matched) if reuse => RouteParams::merge(matched.params(), &own),
            _ => own,
        }
    }
}

impl HrefListener for RouteHrefListener {
    fn on_get_href(&self, event: &NavigationEvent<'_>) -> Option<String> {
        let page = event.target();

        if let Some(uri) = page.property(URI_PROPERTY).and_then(Value::as_str) {
            return Some(uri.to_string());
        }

        let route = page.route()?;
        let Some(router) = event.navigation().router() else {
            warn_log!(
                "Page '{}' has route '{}' but no router is configured",
                page.name(),
                route
            );
            return None;
        };

        let params = Self::route_params(event, page);
        let mut href = match router.assemble(route, &params) {
            Ok(href) => href,
            Err(err) => {
                warn_log!("Router failed for page '{}': {}", page.name(), err);
                return None;
            }
        };

        if let Some(Value::Object(object)) = page.property(QUERY_PROPERTY) {
            let query = QueryParams::from_json(object);
            if !query.is_empty() {
                href.push('?');
                href.push_str(&query.to_query_string());
            }
        }
        if let Some(fragment) = page.property(FRAGMENT_PROPERTY).and_then(Value::as_str) {
            if !fragment.is_empty() {
                href.push('#');
                href.push_str(fragment);
            }
        }

        debug_log!("Route '{}' resolved to '{}'", route, href);
        Some(href)
    }

    fn name(&self) -> &'static str {
        "RouteHrefListener"
    }
}
