use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use catalog_core::Entity;

/// Product identifier. Unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sort key used by producer search: the id parsed as a signed integer.
    ///
    /// Ids that do not parse (including ones with surrounding whitespace or an
    /// overflowing value) sort as `0`.
    pub fn numeric_key(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Hash/Eq agree with `str`, so catalogs can look ids up by `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    producer: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: producer.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// Disambiguated display label: `"<producer> - <name>"`.
    pub fn producer_label(&self) -> String {
        format!("{} - {}", self.producer, self.name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
