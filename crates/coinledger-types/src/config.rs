//! Ledger configuration: initial grant and price catalog.

use serde::{Deserialize, Serialize};

use crate::{LedgerError, PriceCatalog, Result, constants};

/// Process-level ledger configuration, supplied at startup. The ledger
/// treats it as read-only input for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Coins granted to every new account on creation. The only way new
    /// coins enter circulation.
    pub initial_grant: u64,
    /// Item-name → unit-price mapping for purchases.
    pub catalog: PriceCatalog,
}

impl LedgerConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] on parse failure or when
    /// [`Self::validate`] rejects the parsed values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| LedgerError::Configuration(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configured values.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] when the initial grant is
    /// zero. Catalog entries are validated when the catalog is built.
    pub fn validate(&self) -> Result<()> {
        if self.initial_grant == 0 {
            return Err(LedgerError::Configuration(
                "initial_grant must be positive".into(),
            ));
        }
        if let Some((item, _)) = self.catalog.iter().find(|(_, price)| *price == 0) {
            return Err(LedgerError::Configuration(format!(
                "catalog item {item:?} has zero price"
            )));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_grant: constants::INITIAL_GRANT,
            catalog: PriceCatalog::default(),
        }
    }
}
