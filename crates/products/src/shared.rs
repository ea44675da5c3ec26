//! Thread-safe catalog handle.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{Catalog, InMemoryCatalog};
use crate::config::CatalogConfig;
use crate::product::Product;

/// Cloneable handle to one [`InMemoryCatalog`] guarded by a single lock.
///
/// Every operation takes the lock for its whole duration, so concurrent callers
/// observe the operations as if they ran one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<InMemoryCatalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self::from(InMemoryCatalog::with_config(config))
    }

    // A panic while holding the lock cannot leave the catalog half-updated
    // (each mutation is a single map operation), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, InMemoryCatalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InMemoryCatalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_new_product(&self, product: Product) -> bool {
        self.write().add_new_product(product)
    }

    pub fn delete_product(&self, id: &str) -> bool {
        self.write().delete_product(id)
    }

    pub fn list_products_by_name(&self, search: &str) -> HashSet<String> {
        self.read().list_products_by_name(search)
    }

    pub fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        self.read().list_products_by_producer(search)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.read().get(id).cloned()
    }

    /// Copy of the current contents, in catalog order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.read().iter().cloned().collect()
    }
}

impl From<InMemoryCatalog> for SharedCatalog {
    fn from(catalog: InMemoryCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

impl Catalog for SharedCatalog {
    fn add_new_product(&mut self, product: Product) -> bool {
        SharedCatalog::add_new_product(self, product)
    }

    fn delete_product(&mut self, id: &str) -> bool {
        SharedCatalog::delete_product(self, id)
    }

    fn list_products_by_name(&self, search: &str) -> HashSet<String> {
        SharedCatalog::list_products_by_name(self, search)
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        SharedCatalog::list_products_by_producer(self, search)
    }
}
