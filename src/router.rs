//! Route collaborators.
//!
//! The navigation service does not route requests itself. It needs two
//! things from the host application:
//!
//! - a [`RouteMatch`], naming the route matched for the current request
//!   (used by `is_active`);
//! - a [`UrlBuilder`], turning a route name plus parameters into a URL
//!   (used by the built-in `get.href` listener).
//!
//! [`RouteTable`] is a small reference implementation of both, backed by
//! [`matchit`]. Patterns use `:param` for a single segment and `*rest` for a
//! catch-all tail:
//!
//! ```
//! use site_navigator::{RouteParams, RouteTable, UrlBuilder};
//!
//! let mut routes = RouteTable::new();
//! routes.add("home", "/").unwrap();
//! routes.add("user", "/users/:id").unwrap();
//!
//! let matched = routes.match_path("/users/42/").unwrap();
//! assert_eq!(matched.matched_route_name(), "user");
//! assert_eq!(matched.params().get("id"), Some(&"42".to_string()));
//!
//! let params: RouteParams = [("id", "7")].into_iter().collect();
//! assert_eq!(routes.assemble("user", &params).unwrap(), "/users/7");
//! ```

use crate::error::{NavigationError, Result};
use crate::params::RouteParams;
use crate::{debug_log, trace_log};
use std::borrow::Cow;
use std::collections::HashMap;

/// The route matched for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    route_name: String,
    params: RouteParams,
}

impl RouteMatch {
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            params: RouteParams::new(),
        }
    }

    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    pub fn matched_route_name(&self) -> &str {
        &self.route_name
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }
}

/// Builds URLs for named routes.
///
/// Closures with the matching signature implement this trait, which keeps
/// test doubles short:
///
/// ```
/// use site_navigator::{NavigationError, RouteParams, UrlBuilder};
///
/// let builder = |name: &str, _params: &RouteParams| Ok::<_, NavigationError>(format!("/{name}"));
/// assert_eq!(builder.assemble("about", &RouteParams::new()).unwrap(), "/about");
/// ```
pub trait UrlBuilder: Send + Sync + 'static {
    /// Build the URL of route `name` with `params` substituted.
    fn assemble(&self, name: &str, params: &RouteParams) -> Result<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str, &RouteParams) -> Result<String> + Send + Sync + 'static,
{
    fn assemble(&self, name: &str, params: &RouteParams) -> Result<String> {
        self(name, params)
    }
}

/// Normalize a request path: leading slash, no trailing slash (unless root),
/// no query string or fragment.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path == "/" || (path.starts_with('/') && !path.ends_with('/') && !path.contains("//")) {
        return Cow::Borrowed(path);
    }
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    Cow::Owned(format!("/{}", segments.join("/")))
}

/// Translate a `:param` / `*rest` pattern into `matchit` syntax.
fn to_matchit_pattern(pattern: &str) -> String {
    let segments: Vec<String> = pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            if let Some(name) = segment.strip_prefix(':') {
                format!("{{{}}}", name)
            } else if let Some(name) = segment.strip_prefix('*') {
                let name = if name.is_empty() { "path" } else { name };
                format!("{{*{}}}", name)
            } else {
                segment.to_string()
            }
        })
        .collect();
    format!("/{}", segments.join("/"))
}

/// Named route patterns with matching and URL assembly.
#[derive(Clone, Default)]
pub struct RouteTable {
    patterns: HashMap<String, String>,
    matcher: matchit::Router<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pattern` under `name`.
    ///
    /// Fails with [`NavigationError::InvalidRoute`] when the name is taken or
    /// the pattern conflicts with one already registered.
    pub fn add(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> Result<()> {
        let name = name.into();
        let pattern = pattern.into();
        if self.patterns.contains_key(&name) {
            return Err(NavigationError::InvalidRoute {
                pattern,
                message: format!("route name '{}' is already registered", name),
            });
        }
        self.matcher
            .insert(to_matchit_pattern(&pattern), name.clone())
            .map_err(|e| NavigationError::InvalidRoute {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        debug_log!("Registered route '{}' -> '{}'", name, pattern);
        self.patterns.insert(name, pattern);
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Result<Self> {
        self.add(name, pattern)?;
        Ok(self)
    }

    /// Pattern registered under `name`.
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Match a request path against the registered patterns.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize_path(path);
        let matched = self.matcher.at(&path).ok()?;
        let params = matched
            .params
            .iter()
            .map(|(key, value)| {
                let value = urlencoding::decode(value)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| value.to_string());
                (key.to_string(), value)
            })
            .collect();
        trace_log!("Path '{}' matched route '{}'", path, matched.value);
        Some(RouteMatch::new(matched.value.clone()).with_params(params))
    }
}

impl UrlBuilder for RouteTable {
    fn assemble(&self, name: &str, params: &RouteParams) -> Result<String> {
        let pattern = self
            .patterns
            .get(name)
            .ok_or_else(|| NavigationError::RouteNotFound {
                name: name.to_string(),
            })?;

        let mut url = String::new();
        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            url.push('/');
            if let Some(param) = segment.strip_prefix(':') {
                let value = params.get(param).ok_or_else(|| missing(name, param))?;
                url.push_str(&urlencoding::encode(value));
            } else if let Some(param) = segment.strip_prefix('*') {
                let param = if param.is_empty() { "path" } else { param };
                let value = params.get(param).ok_or_else(|| missing(name, param))?;
                url.push_str(value.trim_start_matches('/'));
            } else {
                url.push_str(segment);
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }
}

fn missing(route: &str, param: &str) -> NavigationError {
    NavigationError::MissingParameter {
        route: route.to_string(),
        param: param.to_string(),
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
