//! Catalog configuration (search result caps).

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Default cap on labels returned by name search.
pub const DEFAULT_NAME_SEARCH_LIMIT: usize = 10;

/// Default cap on names returned by producer search.
pub const DEFAULT_PRODUCER_SEARCH_LIMIT: usize = 10;

pub const NAME_SEARCH_LIMIT_VAR: &str = "CATALOG_NAME_SEARCH_LIMIT";
pub const PRODUCER_SEARCH_LIMIT_VAR: &str = "CATALOG_PRODUCER_SEARCH_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of matching products considered by name search.
    pub name_search_limit: usize,
    /// Maximum number of names returned by producer search.
    pub producer_search_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name_search_limit: DEFAULT_NAME_SEARCH_LIMIT,
            producer_search_limit: DEFAULT_PRODUCER_SEARCH_LIMIT,
        }
    }
}

impl CatalogConfig {
    /// Load limits from `CATALOG_NAME_SEARCH_LIMIT` / `CATALOG_PRODUCER_SEARCH_LIMIT`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            name_search_limit: parse_limit(
                NAME_SEARCH_LIMIT_VAR,
                lookup(NAME_SEARCH_LIMIT_VAR),
                defaults.name_search_limit,
            )?,
            producer_search_limit: parse_limit(
                PRODUCER_SEARCH_LIMIT_VAR,
                lookup(PRODUCER_SEARCH_LIMIT_VAR),
                defaults.producer_search_limit,
            )?,
        })
    }
}

fn parse_limit(key: &str, raw: Option<String>, default: usize) -> DomainResult<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let limit: usize = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}={raw:?}: {e}")))?;

    if limit == 0 {
        return Err(DomainError::validation(format!("{key} must be greater than zero")));
    }

    Ok(limit)
}
