//! Building page trees from declarative specifications.
//!
//! A page spec is a JSON-like object:
//!
//! ```json
//! {
//!   "name": "root",
//!   "attributes": { "class": "menu" },
//!   "properties": { "route": "home" },
//!   "pages": [ { "name": "child" } ]
//! }
//! ```
//!
//! `name` is required at every depth. `attributes` and `properties` replace
//! the page's empty defaults wholesale, and `pages` are built recursively and
//! appended in order. When a spec is malformed the error names its location
//! (`root`, `root.pages[0]`, `root.pages[0].pages[2]`, ...) and no partial
//! tree is returned.

use crate::error::{NavigationError, Result};
use crate::page::Page;
use crate::trace_log;
use serde_json::Value;

/// Stateless builder turning page specs into [`Page`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFactory;

impl PageFactory {
    /// Build a single page tree.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use site_navigator::PageFactory;
    ///
    /// let root = PageFactory::create(&json!({
    ///     "name": "root",
    ///     "pages": [{ "name": "child", "properties": { "route": "home" } }]
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(root.pages()[0].route(), Some("home"));
    /// ```
    pub fn create(spec: &Value) -> Result<Page> {
        build(spec, "root")
    }

    /// Build a forest from an array of specs; a single object yields one root.
    pub fn create_many(spec: &Value) -> Result<Vec<Page>> {
        match spec {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| build(item, &format!("[{}]", i)))
                .collect(),
            Value::Object(_) => Ok(vec![build(spec, "root")?]),
            _ => Err(NavigationError::invalid_spec(
                "root",
                "expected an object or an array of objects",
            )),
        }
    }

    /// Parse JSON text and build a single page tree.
    pub fn from_json_str(json: &str) -> Result<Page> {
        let spec: Value = serde_json::from_str(json)
            .map_err(|e| NavigationError::invalid_spec("root", e.to_string()))?;
        Self::create(&spec)
    }
}

fn build(spec: &Value, location: &str) -> Result<Page> {
    let object = spec
        .as_object()
        .ok_or_else(|| NavigationError::invalid_spec(location, "expected an object"))?;

    let name = match object.get("name") {
        Some(Value::String(name)) => name,
        Some(_) => {
            return Err(NavigationError::invalid_spec(
                location,
                "'name' must be a string",
            ))
        }
        None => {
            return Err(NavigationError::invalid_spec(
                location,
                "missing required key 'name'",
            ))
        }
    };

    let mut page = Page::new(name.as_str());

    match object.get("attributes") {
        Some(Value::Object(map)) => page.set_attributes(map.clone()),
        Some(_) => {
            return Err(NavigationError::invalid_spec(
                location,
                "'attributes' must be an object",
            ))
        }
        None => {}
    }

    match object.get("properties") {
        Some(Value::Object(map)) => page.set_properties(map.clone()),
        Some(_) => {
            return Err(NavigationError::invalid_spec(
                location,
                "'properties' must be an object",
            ))
        }
        None => {}
    }

    match object.get("pages") {
        Some(Value::Array(children)) => {
            for (i, child) in children.iter().enumerate() {
                page.add_page(build(child, &format!("{}.pages[{}]", location, i))?);
            }
        }
        Some(_) => {
            return Err(NavigationError::invalid_spec(
                location,
                "'pages' must be an array",
            ))
        }
        None => {}
    }

    trace_log!(
        "Built page '{}' {} at {} with {} children",
        page.name(),
        page.id(),
        location,
        page.pages().len()
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_root_name() {
        let err = PageFactory::create(&json!({ "pages": [{ "name": "A" }] })).unwrap_err();
        assert_eq!(
            err,
            NavigationError::invalid_spec("root", "missing required key 'name'")
        );
    }

    #[test]
    fn test_missing_nested_name_reports_location() {
        let spec = json!({
            "name": "root",
            "pages": [
                { "name": "ok" },
                { "name": "parent", "pages": [{ "label": "no name" }] }
            ]
        });
        let err = PageFactory::create(&spec).unwrap_err();
        match err {
            NavigationError::InvalidPageSpec { location, .. } => {
                assert_eq!(location, "root.pages[1].pages[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builds_children_in_order() {
        let spec = json!({
            "name": "root",
            "attributes": { "class": "menu" },
            "pages": [{ "name": "a" }, { "name": "b" }, { "name": "c" }]
        });
        let root = PageFactory::create(&spec).unwrap();
        let names: Vec<&str> = root.pages().iter().map(Page::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(root.attribute("class"), Some(&json!("menu")));
        assert!(root.properties().is_empty());
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(PageFactory::create(&json!({ "name": 3 })).is_err());
        assert!(PageFactory::create(&json!({ "name": "x", "pages": {} })).is_err());
        assert!(PageFactory::create(&json!({ "name": "x", "properties": [] })).is_err());
        assert!(PageFactory::create(&json!("x")).is_err());
    }

    #[test]
    fn test_create_many() {
        let pages = PageFactory::create_many(&json!([{ "name": "a" }, { "name": "b" }])).unwrap();
        assert_eq!(pages.len(), 2);

        let single = PageFactory::create_many(&json!({ "name": "only" })).unwrap();
        assert_eq!(single[0].name(), "only");

        let err = PageFactory::create_many(&json!([{ "name": "a" }, {}])).unwrap_err();
        assert!(matches!(err, NavigationError::InvalidPageSpec { location, .. } if location == "[1]"));
    }

    #[test]
    fn test_from_json_str() {
        let page = PageFactory::from_json_str(r#"{"name": "home"}"#).unwrap();
        assert_eq!(page.name(), "home");
        assert!(PageFactory::from_json_str("{").unwrap_err().is_validation_error());
    }
}
