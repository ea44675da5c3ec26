//! Products catalog module.
//!
//! An in-memory catalog of products supporting add, delete, and two substring
//! searches (by product name and by producer). Everything here is deterministic
//! domain logic: no IO, no persistence.

pub mod catalog;
pub mod config;
pub mod product;
pub mod shared;

pub use catalog::{Catalog, InMemoryCatalog};
pub use config::CatalogConfig;
pub use product::{Product, ProductId};
pub use shared::SharedCatalog;
