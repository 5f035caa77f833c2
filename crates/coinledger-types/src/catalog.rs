//! Price catalog: immutable item-name → unit-price mapping.
//!
//! The catalog is sourced from configuration at process start and is never
//! persisted or mutated by the ledger. Prices are positive integers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result};

/// Immutable mapping from catalog item name to unit price in coins.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    prices: BTreeMap<String, u64>,
}

impl PriceCatalog {
    /// Build a catalog from (name, price) pairs.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] if any price is zero or any
    /// item name is empty.
    pub fn new(entries: impl IntoIterator<Item = (String, u64)>) -> Result<Self> {
        let prices: BTreeMap<String, u64> = entries.into_iter().collect();
        for (item, price) in &prices {
            if item.is_empty() {
                return Err(LedgerError::Configuration(
                    "catalog item name must not be empty".into(),
                ));
            }
            if *price == 0 {
                return Err(LedgerError::Configuration(format!(
                    "catalog item {item:?} has zero price"
                )));
            }
        }
        Ok(Self { prices })
    }

    /// Unit price of an item, or `None` if the item is not in the catalog.
    #[must_use]
    pub fn price(&self, item: &str) -> Option<u64> {
        self.prices.get(item).copied()
    }

    /// Whether the catalog carries the item.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.prices.contains_key(item)
    }

    /// Iterate (item, price) pairs in item-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of catalog items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceCatalog {
    /// The stock merch catalog of the internal store.
    fn default() -> Self {
        let entries = [
            ("t-shirt", 80),
            ("cup", 20),
            ("book", 50),
            ("pen", 10),
            ("powerbank", 200),
            ("hoody", 300),
            ("umbrella", 200),
            ("socks", 10),
            ("wallet", 50),
            ("pink-hoody", 500),
        ];
        let prices = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self { prices }
    }
}
