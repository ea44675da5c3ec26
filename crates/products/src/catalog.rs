//! The catalog contract and its owned, single-threaded implementation.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use catalog_core::Entity;

use crate::config::CatalogConfig;
use crate::product::{Product, ProductId};

/// Product catalog operations.
///
/// Not-found and already-exists outcomes are plain `false` results, never
/// errors. Name search yields a set of labels while producer search yields an
/// ordered list of names; the two are intentionally different containers.
pub trait Catalog {
    /// Adds `product` unless a product with the same id is already present.
    ///
    /// Returns `false` (and leaves the catalog untouched) on a duplicate id.
    fn add_new_product(&mut self, product: Product) -> bool;

    /// Removes the product with `id`, keeping the order of the others.
    ///
    /// Returns `true` if a product was removed.
    fn delete_product(&mut self, id: &str) -> bool;

    /// Labels of products whose name contains `search` (case-sensitive).
    ///
    /// Only the first `name_search_limit` matches (in catalog order) are
    /// labelled. A match is labelled `"<producer> - <name>"` when another match
    /// anywhere in the filtered set shares its name, otherwise just `"<name>"`.
    fn list_products_by_name(&self, search: &str) -> HashSet<String>;

    /// Names of products whose producer contains `search`, ordered by the
    /// numeric value of their id and capped at `producer_search_limit`.
    fn list_products_by_producer(&self, search: &str) -> Vec<String>;
}

/// Owned in-memory catalog.
///
/// Products are kept in arrival order in an insertion-ordered hash index, so
/// duplicate detection is a hash lookup while deletions still preserve the
/// relative order of the remaining products.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: IndexMap<ProductId, Product>,
    config: CatalogConfig,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            products: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }
}

impl Catalog for InMemoryCatalog {
    fn add_new_product(&mut self, product: Product) -> bool {
        match self.products.entry(product.id().clone()) {
            Entry::Occupied(existing) => {
                debug!(product_id = %existing.key(), "product id already present; add rejected");
                false
            }
            Entry::Vacant(slot) => {
                debug!(product_id = %slot.key(), "product added");
                slot.insert(product);
                true
            }
        }
    }

    fn delete_product(&mut self, id: &str) -> bool {
        // `shift_remove` keeps the remaining products in arrival order.
        let removed = self.products.shift_remove(id).is_some();
        debug!(product_id = id, removed, "delete product");
        removed
    }

    fn list_products_by_name(&self, search: &str) -> HashSet<String> {
        if self.products.is_empty() {
            return HashSet::new();
        }

        let matches: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.name().contains(search))
            .collect();

        // Name collisions are counted over every match, not just the capped prefix.
        let mut name_counts: HashMap<&str, usize> = HashMap::new();
        for product in &matches {
            *name_counts.entry(product.name()).or_default() += 1;
        }

        let labels: HashSet<String> = matches
            .iter()
            .take(self.config.name_search_limit)
            .map(|p| {
                if name_counts.get(p.name()).copied().unwrap_or(0) > 1 {
                    p.producer_label()
                } else {
                    p.name().to_string()
                }
            })
            .collect();

        trace!(search, matched = matches.len(), returned = labels.len(), "name search");
        labels
    }

    fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        if self.products.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.producer().contains(search))
            .collect();

        // Stable: products with equal numeric ids keep catalog order.
        matches.sort_by_key(|p| p.id().numeric_key());

        let names: Vec<String> = matches
            .iter()
            .take(self.config.producer_search_limit)
            .map(|p| p.name().to_string())
            .collect();

        trace!(search, matched = matches.len(), returned = names.len(), "producer search");
        names
    }
}
