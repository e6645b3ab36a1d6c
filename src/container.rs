//! Containers and the named container registry.
//!
//! A [`Container`] is one menu: an ordered list of root pages. The
//! [`ContainerRegistry`] stores containers under unique names so several
//! menus (main, footer, sidebar, ...) can live in one application.
//!
//! Registry misuse is reported, never silently tolerated:
//!
//! - adding a name twice fails with
//!   [`DuplicateContainer`](crate::NavigationError::DuplicateContainer) and
//!   keeps the original container;
//! - getting or removing an unknown name fails with
//!   [`ContainerNotFound`](crate::NavigationError::ContainerNotFound).

use crate::error::{NavigationError, Result};
use crate::page::{Page, PageId};
use crate::{debug_log, info_log};
use std::collections::HashMap;

/// A named menu's pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pages: Vec<Page>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from a list of root pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Root pages, in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Mutable access to the root pages.
    pub fn pages_mut(&mut self) -> &mut Vec<Page> {
        &mut self.pages
    }

    /// Append a root page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove a page from anywhere in the container.
    pub fn remove_page(&mut self, id: PageId) -> Option<Page> {
        if let Some(pos) = self.pages.iter().position(|p| p.id() == id) {
            return Some(self.pages.remove(pos));
        }
        self.pages.iter_mut().find_map(|p| p.remove_page(id))
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pre-order iteration over every page of every root.
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().flat_map(Page::iter)
    }

    pub fn find_by_id(&self, id: PageId) -> Option<&Page> {
        self.iter().find(|p| p.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Page> {
        self.iter().find(|p| p.name() == name)
    }
}

impl From<Page> for Container {
    fn from(page: Page) -> Self {
        Self { pages: vec![page] }
    }
}

impl From<Vec<Page>> for Container {
    fn from(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

/// Name-keyed store of containers.
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    containers: HashMap<String, Container>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `container` under `name`.
    pub fn add(&mut self, name: impl Into<String>, container: Container) -> Result<()> {
        let name = name.into();
        if self.containers.contains_key(&name) {
            return Err(NavigationError::DuplicateContainer { name });
        }
        info_log!(
            "Registered container '{}' ({} root pages)",
            name,
            container.pages().len()
        );
        self.containers.insert(name, container);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Container> {
        self.containers
            .get(name)
            .ok_or_else(|| NavigationError::ContainerNotFound {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Container> {
        self.containers
            .get_mut(name)
            .ok_or_else(|| NavigationError::ContainerNotFound {
                name: name.to_string(),
            })
    }

    /// Unregister and return the container stored under `name`.
    pub fn remove(&mut self, name: &str) -> Result<Container> {
        let container =
            self.containers
                .remove(name)
                .ok_or_else(|| NavigationError::ContainerNotFound {
                    name: name.to_string(),
                })?;
        info_log!("Removed container '{}'", name);
        Ok(container)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    pub fn all(&self) -> &HashMap<String, Container> {
        &self.containers
    }

    pub fn clear(&mut self) {
        debug_log!("Clearing {} containers", self.containers.len());
        self.containers.clear();
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
