//! Ordered page registry.
//!
//! The registry is built once at startup and read-only afterwards. Insertion
//! order is navigation order. Ids are unique: a second registration under an
//! existing id is rejected and the first definition stays authoritative.

use crate::page::PageDefinition;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("duplicate page id: {0}")]
    DuplicateId(String),
    #[error("page not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Vec<PageDefinition>,
    index: HashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from pages in order, failing on the first duplicate id.
    pub fn from_pages(
        pages: impl IntoIterator<Item = PageDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for page in pages {
            registry.register(page)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, definition: PageDefinition) -> Result<(), RegistryError> {
        if self.index.contains_key(definition.id()) {
            return Err(RegistryError::DuplicateId(definition.id().to_string()));
        }
        self.index
            .insert(definition.id().to_string(), self.pages.len());
        self.pages.push(definition);
        Ok(())
    }

    /// All pages in registration order.
    pub fn list(&self) -> &[PageDefinition] {
        &self.pages
    }

    pub fn get(&self, id: &str) -> Result<&PageDefinition, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.pages[i])
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Zero-based navigation position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The pages before and after `id` in navigation order.
    pub fn neighbours(&self, id: &str) -> (Option<&PageDefinition>, Option<&PageDefinition>) {
        match self.position(id) {
            Some(i) => (
                i.checked_sub(1).map(|p| &self.pages[p]),
                self.pages.get(i + 1),
            ),
            None => (None, None),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
