//! In-memory menu repository, used by the HTTP tests and local demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::MenuItem;
use crate::error::DomainError;
use super::MenuRepository;

#[derive(Default)]
pub struct InMemoryMenuRepository {
    menus: RwLock<HashMap<String, Vec<MenuItem>>>,
    fetches: AtomicUsize,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(self, menu_name: &str, items: Vec<MenuItem>) -> Self {
        self.insert_menu(menu_name, items);
        self
    }

    pub fn insert_menu(&self, menu_name: &str, mut items: Vec<MenuItem>) {
        items.sort_by_key(MenuItem::sort_key);
        if let Ok(mut menus) = self.menus.write() {
            menus.insert(menu_name.to_string(), items);
        }
    }

    /// Number of `fetch_items` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let menus = self
            .menus
            .read()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;
        Ok(menus.get(menu_name).cloned().unwrap_or_default())
    }
}
