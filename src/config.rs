//! Declarative navigation configuration.
//!
//! [`NavigationOptions`] describes a whole navigation service: its flags and
//! every named container as page specs (see [`PageFactory`]). Options load
//! from JSON or TOML:
//!
//! ```
//! use site_navigator::{EventManager, Navigation, NavigationOptions};
//!
//! let options = NavigationOptions::from_toml_str(r#"
//!     is_active_recursion = false
//!
//!     [[containers.main]]
//!     name = "Home"
//!     properties = { route = "home" }
//!
//!     [[containers.main]]
//!     name = "Blog"
//!     properties = { route = "blog" }
//! "#).unwrap();
//!
//! let nav = Navigation::from_options(&options, EventManager::with_defaults()).unwrap();
//! assert_eq!(nav.get_container("main").unwrap().pages().len(), 2);
//! assert!(!nav.is_active_recursion());
//! ```
//!
//! A container value may be a single page spec (one root) or an array of
//! page specs (several roots).

use crate::container::Container;
use crate::error::{NavigationError, Result};
use crate::factory::PageFactory;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Configuration for a [`Navigation`](crate::Navigation) service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationOptions {
    /// Whether a page is active when one of its descendants is (default: true).
    #[serde(default = "default_true")]
    pub is_active_recursion: bool,

    /// Maximum entries per cache; absent or 0 means unbounded.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// Container name -> page spec(s).
    #[serde(default)]
    pub containers: BTreeMap<String, Value>,
}

fn default_true() -> bool {
    true
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            is_active_recursion: true,
            cache_capacity: None,
            containers: BTreeMap::new(),
        }
    }
}

impl NavigationOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Add or replace a container spec.
    pub fn container(mut self, name: impl Into<String>, spec: Value) -> Self {
        self.containers.insert(name.into(), spec);
        self
    }

    /// Build every configured container, in name order.
    ///
    /// Spec errors are reported with the container name prepended to their
    /// location, e.g. `containers.main[0].pages[1]`.
    pub fn build_containers(&self) -> Result<Vec<(String, Container)>> {
        self.containers
            .iter()
            .map(|(name, spec)| -> Result<(String, Container)> {
                let pages = PageFactory::create_many(spec).map_err(|err| match err {
                    NavigationError::InvalidPageSpec { location, message } => {
                        NavigationError::InvalidPageSpec {
                            location: qualify(name, spec, &location),
                            message,
                        }
                    }
                    other => other,
                })?;
                Ok((name.clone(), Container::from_pages(pages)))
            })
            .collect()
    }
}

fn qualify(container: &str, spec: &Value, location: &str) -> String {
    // A single-object spec reports locations starting at "root".
    let location = if spec.is_array() {
        location
    } else {
        location.strip_prefix("root").unwrap_or(location)
    };
    format!("containers.{}{}", container, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = NavigationOptions::from_json_str("{}").unwrap();
        assert!(options.is_active_recursion);
        assert_eq!(options.cache_capacity, None);
        assert!(options.containers.is_empty());
        assert_eq!(options, NavigationOptions::default());
    }

    #[test]
    fn test_single_and_array_containers() {
        let options = NavigationOptions::default()
            .container("footer", json!({ "name": "About" }))
            .container("main", json!([{ "name": "Home" }, { "name": "Blog" }]));

        let built = options.build_containers().unwrap();
        assert_eq!(built[0].0, "footer");
        assert_eq!(built[0].1.pages().len(), 1);
        assert_eq!(built[1].1.pages().len(), 2);
    }

    #[test]
    fn test_error_location_is_qualified() {
        let options = NavigationOptions::default()
            .container("main", json!([{ "name": "Home", "pages": [{}] }]))
            .container("side", json!({ "pages": [] }));

        let err = options.build_containers().unwrap_err();
        assert_eq!(
            err,
            NavigationError::invalid_spec("containers.main[0].pages[0]", "missing required key 'name'")
        );

        let side_only = NavigationOptions::default().container("side", json!({ "pages": [] }));
        match side_only.build_containers().unwrap_err() {
            NavigationError::InvalidPageSpec { location, .. } => {
                assert_eq!(location, "containers.side");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_syntax_errors_are_config_errors() {
        assert!(matches!(
            NavigationOptions::from_json_str("{"),
            Err(NavigationError::Config { .. })
        ));
        assert!(matches!(
            NavigationOptions::from_toml_str("containers = ["),
            Err(NavigationError::Config { .. })
        ));
    }
}
