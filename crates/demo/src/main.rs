use std::collections::BTreeSet;

use serde::Serialize;

use catalog_core::DomainError;
use catalog_products::{Catalog, CatalogConfig, InMemoryCatalog, Product};

const SEED: &[(&str, &str, &str)] = &[
    ("3", "Some Product3", "Some Producer2"),
    ("4", "Some Product1", "Some Producer3"),
    ("2", "Some Product2", "Some Producer2"),
    ("1", "Some Product1", "Some Producer1"),
    ("5", "Other Product5", "Other Producer4"),
    ("6", "Other Product6", "Other Producer4"),
    ("7", "Other Product7", "Other Producer4"),
    ("8", "Other Product8", "Other Producer4"),
    ("9", "Other Product9", "Other Producer4"),
    ("10", "Other Product10", "Other Producer4"),
    ("11", "Other Product11", "Other Producer4"),
];

#[derive(Debug, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
enum QueryResult<'a> {
    ByName { search: &'a str, labels: BTreeSet<String> },
    ByProducer { search: &'a str, names: Vec<String> },
}

fn seed(catalog: &mut impl Catalog) -> Result<(), DomainError> {
    for &(id, name, producer) in SEED {
        if !catalog.add_new_product(Product::new(id, name, producer)) {
            return Err(DomainError::conflict(format!("product {id} already exists")));
        }
    }
    Ok(())
}

fn print(result: &QueryResult<'_>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env()?;
    tracing::info!(
        name_search_limit = config.name_search_limit,
        producer_search_limit = config.producer_search_limit,
        "catalog configured"
    );

    let mut catalog = InMemoryCatalog::with_config(config);
    seed(&mut catalog)?;
    tracing::info!(products = catalog.len(), "catalog seeded");

    for search in ["Product", "Some Product"] {
        // Sorted only for stable output; the catalog returns an unordered set.
        let labels = catalog.list_products_by_name(search).into_iter().collect();
        print(&QueryResult::ByName { search, labels })?;
    }

    for search in ["Producer", "Some Producer"] {
        let names = catalog.list_products_by_producer(search);
        print(&QueryResult::ByProducer { search, names })?;
    }

    if !catalog.delete_product("4") {
        return Err(DomainError::not_found("product 4").into());
    }
    let names = catalog.list_products_by_producer("Some Producer");
    print(&QueryResult::ByProducer { search: "Some Producer", names })?;

    tracing::info!(products = catalog.len(), "done");
    Ok(())
}
