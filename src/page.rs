//! Navigation pages.
//!
//! A [`Page`] is one menu entry: a name, free-form HTML-like `attributes`,
//! application-defined `properties` and an ordered list of child pages.
//! Children are owned, so a page tree is acyclic by construction.
//!
//! Pages are identified by [`PageId`], never by name. Ids are handed out from
//! a process-wide counter when a page is constructed. Cloning a page keeps
//! the ids of the whole cloned subtree, so a copy answers `is_active` and
//! `get_href` exactly like the original.
//!
//! # Reserved properties
//!
//! | Key                    | Meaning                                         |
//! |------------------------|-------------------------------------------------|
//! | `route`                | Name of the route this page represents          |
//! | `params`               | Object of route parameters for URL assembly     |
//! | `query`                | Object of query parameters appended to the href |
//! | `fragment`             | Fragment appended to the href                   |
//! | `uri`                  | Literal href, bypasses the router               |
//! | `reuse_matched_params` | Start from the current match's parameters       |
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use site_navigator::Page;
//!
//! let mut home = Page::new("home");
//! home.set_property("route", json!("home"));
//! home.add_page(Page::new("news"));
//!
//! assert_eq!(home.route(), Some("home"));
//! assert!(home.has_pages());
//! ```

use serde_json::{Map, Value};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Property key holding the route name a page represents.
pub const ROUTE_PROPERTY: &str = "route";

static NEXT_PAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    fn next() -> Self {
        Self(NEXT_PAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Free-form string-keyed map used for attributes and properties.
pub type PropertyMap = Map<String, Value>;

/// A node in a navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    id: PageId,
    name: String,
    attributes: PropertyMap,
    properties: PropertyMap,
    pages: Vec<Page>,
}

impl Page {
    /// Create a page with empty attributes, properties and children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PageId::next(),
            name: name.into(),
            attributes: PropertyMap::new(),
            properties: PropertyMap::new(),
            pages: Vec::new(),
        }
    }

    /// Builder-style: replace all attributes.
    pub fn with_attributes(mut self, attributes: PropertyMap) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder-style: replace all properties.
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// Builder-style: set the `route` property.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.properties
            .insert(ROUTE_PROPERTY.to_string(), Value::String(route.into()));
        self
    }

    /// Builder-style: append a child page.
    pub fn child(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &PropertyMap {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    pub fn set_attributes(&mut self, attributes: PropertyMap) {
        self.attributes = attributes;
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    pub fn set_properties(&mut self, properties: PropertyMap) {
        self.properties = properties;
    }

    /// The route name stored in the `route` property, if it is a string.
    pub fn route(&self) -> Option<&str> {
        self.properties.get(ROUTE_PROPERTY).and_then(Value::as_str)
    }

    /// Direct children, in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Append a child page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove the page with `id` from anywhere below this page.
    ///
    /// Returns the detached subtree, or `None` if no descendant has that id.
    pub fn remove_page(&mut self, id: PageId) -> Option<Page> {
        if let Some(pos) = self.pages.iter().position(|p| p.id == id) {
            return Some(self.pages.remove(pos));
        }
        self.pages.iter_mut().find_map(|p| p.remove_page(id))
    }

    /// Find this page or a descendant by id.
    pub fn find_by_id(&self, id: PageId) -> Option<&Page> {
        self.iter().find(|p| p.id == id)
    }

    /// Find the first page (pre-order) with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Page> {
        self.iter().find(|p| p.name == name)
    }

    /// Depth-first, pre-order iterator over this page and all descendants.
    pub fn iter(&self) -> PageIter<'_> {
        PageIter { stack: vec![self] }
    }

    /// All descendants (not including `self`) in children-before-parent order.
    ///
    /// The order is fixed when this is called, so the returned list stays
    /// valid regardless of what the caller does with it.
    pub fn descendants_post_order(&self) -> Vec<&Page> {
        let mut out = Vec::new();
        for child in &self.pages {
            collect_post_order(child, &mut out);
        }
        out
    }
}

fn collect_post_order<'a>(page: &'a Page, out: &mut Vec<&'a Page>) {
    for child in &page.pages {
        collect_post_order(child, out);
    }
    out.push(page);
}

/// Pre-order iterator returned by [`Page::iter`].
#[derive(Debug)]
pub struct PageIter<'a> {
    stack: Vec<&'a Page>,
}

impl<'a> Iterator for PageIter<'a> {
    type Item = &'a Page;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.stack.pop()?;
        self.stack.extend(page.pages.iter().rev());
        Some(page)
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Page;
    type IntoIter = PageIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Page {
        Page::new("root")
            .child(Page::new("a").child(Page::new("a1")).child(Page::new("a2")))
            .child(Page::new("b"))
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Page::new("same");
        let b = Page::new("same");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let original = tree();
        let copy = original.clone();
        assert_eq!(original.id(), copy.id());
        assert_eq!(original.pages()[0].pages()[1].id(), copy.pages()[0].pages()[1].id());
    }

    #[test]
    fn test_pre_order_iteration() {
        let root = tree();
        let names: Vec<&str> = root.iter().map(Page::name).collect();
        assert_eq!(names, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_post_order_descendants() {
        let root = tree();
        let names: Vec<&str> = root.descendants_post_order().into_iter().map(Page::name).collect();
        assert_eq!(names, vec!["a1", "a2", "a", "b"]);
    }

    #[test]
    fn test_route_property() {
        let page = Page::new("home").with_route("home");
        assert_eq!(page.route(), Some("home"));

        let mut page = Page::new("odd");
        page.set_property("route", json!(5));
        assert_eq!(page.route(), None);
    }

    #[test]
    fn test_remove_nested_page() {
        let mut root = tree();
        let a2 = root.find_by_name("a2").unwrap().id();

        let removed = root.remove_page(a2).unwrap();
        assert_eq!(removed.name(), "a2");
        assert!(root.find_by_id(a2).is_none());
        assert!(root.remove_page(a2).is_none());
    }

    #[test]
    fn test_attributes() {
        let mut page = Page::new("link");
        page.set_attribute("class", json!("nav-item"));
        assert_eq!(page.attribute("class"), Some(&json!("nav-item")));
        assert!(page.properties().is_empty());
    }
}
