//! Route and query parameters.
//!
//! - [`RouteParams`] — named path parameters, as carried by a
//!   [`RouteMatch`](crate::RouteMatch) and consumed by
//!   [`UrlBuilder::assemble`](crate::UrlBuilder::assemble).
//! - [`QueryParams`] — query string parameters appended to assembled hrefs.
//!   Multi-valued keys (`?tag=a&tag=b`) are supported and keys serialize in
//!   sorted order, so the same page always produces the same href.
//!
//! Both can be built from the JSON objects stored in page properties:
//!
//! ```
//! use serde_json::json;
//! use site_navigator::{QueryParams, RouteParams};
//!
//! let params = RouteParams::from_json(json!({ "id": 42, "slug": "intro" }).as_object().unwrap());
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//!
//! let query = QueryParams::from_json(json!({ "tag": ["a", "b"], "page": 2 }).as_object().unwrap());
//! assert_eq!(query.to_query_string(), "page=2&tag=a&tag=b");
//! ```

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Render a scalar JSON value the way it should appear inside a URL.
///
/// Strings are used verbatim, numbers and booleans via their JSON text.
/// `null`, arrays and objects have no scalar form and yield `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Named path parameters.
///
/// # Example
///
/// ```
/// use site_navigator::RouteParams;
///
/// let mut params = RouteParams::new();
/// params.insert("id".to_string(), "123".to_string());
///
/// assert_eq!(params.get("id"), Some(&"123".to_string()));
/// assert_eq!(params.get_as::<i32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty route parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Build from a JSON object, keeping only scalar values.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let params = object
            .iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.clone(), v)))
            .collect();
        Self { params }
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type.
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.insert(key, value);
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Overlay `overrides` on top of `base`; `overrides` wins on collision.
    ///
    /// Used when a page asks to reuse the parameters of the current route
    /// match and supplies some of its own.
    ///
    /// ```
    /// use site_navigator::RouteParams;
    ///
    /// let mut matched = RouteParams::new();
    /// matched.insert("lang".to_string(), "en".to_string());
    /// matched.insert("id".to_string(), "1".to_string());
    ///
    /// let mut own = RouteParams::new();
    /// own.insert("id".to_string(), "2".to_string());
    ///
    /// let merged = RouteParams::merge(&matched, &own);
    /// assert_eq!(merged.get("lang"), Some(&"en".to_string()));
    /// assert_eq!(merged.get("id"), Some(&"2".to_string()));
    /// ```
    pub fn merge(base: &RouteParams, overrides: &RouteParams) -> RouteParams {
        let mut merged = base.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query string parameters with support for repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object.
    ///
    /// Arrays become repeated keys; `null`, nested objects and non-scalar
    /// array items are skipped.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let mut query = Self::new();
        for (key, value) in object {
            match value {
                Value::Array(items) => {
                    for item in items.iter().filter_map(scalar_to_string) {
                        query.insert(key.clone(), item);
                    }
                }
                other => {
                    if let Some(v) = scalar_to_string(other) {
                        query.insert(key.clone(), v);
                    }
                }
            }
        }
        query
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)?.first()
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Option<&Vec<String>> {
        self.params.get(key)
    }

    /// Append a value for the given key.
    pub fn insert(&mut self, key: String, value: String) {
        self.params.entry(key).or_default().push(value);
    }

    /// Serialize into a percent-encoded query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of unique keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_params_get_as() {
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "123".to_string());
        params.insert("active".to_string(), "true".to_string());

        assert_eq!(params.get_as::<u32>("id"), Some(123));
        assert_eq!(params.get_as::<bool>("active"), Some(true));
        assert_eq!(params.get_as::<i32>("missing"), None);
    }

    #[test]
    fn test_route_params_from_json_skips_non_scalars() {
        let object = json!({ "id": 7, "draft": false, "tags": ["a"], "meta": null });
        let params = RouteParams::from_json(object.as_object().unwrap());

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some(&"7".to_string()));
        assert_eq!(params.get("draft"), Some(&"false".to_string()));
        assert!(!params.contains("tags"));
    }

    #[test]
    fn test_route_params_from_iter() {
        let params: RouteParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_query_string_is_sorted_and_encoded() {
        let mut query = QueryParams::new();
        query.insert("q".to_string(), "rust lang".to_string());
        query.insert("a".to_string(), "x&y".to_string());

        assert_eq!(query.to_query_string(), "a=x%26y&q=rust%20lang");
    }

    #[test]
    fn test_query_from_json_repeats_array_keys() {
        let object = json!({ "tag": ["news", 3, {}], "page": 1 });
        let query = QueryParams::from_json(object.as_object().unwrap());

        assert_eq!(query.get_all("tag").unwrap(), &vec!["news".to_string(), "3".to_string()]);
        assert_eq!(query.get("page"), Some(&"1".to_string()));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_empty_query() {
        let query = QueryParams::new();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }
}
