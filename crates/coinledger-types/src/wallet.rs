//! Wallet read views: balance, signed movement history, inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, RecordId, TransferKind};

/// One coin movement as seen from a particular account.
///
/// `amount` is signed relative to the account the view was built for:
/// positive means the account received coins, negative means it sent them.
/// `counterparty` is the other side of the movement. This is enough for a
/// presentation layer to split history into "received" and "sent" without
/// ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMovement {
    pub record_id: RecordId,
    pub counterparty: AccountId,
    pub amount: i64,
    pub kind: TransferKind,
    pub created_at: DateTime<Utc>,
}

impl CoinMovement {
    /// Whether coins flowed into the viewed account.
    #[must_use]
    pub fn is_inbound(&self) -> bool {
        self.amount > 0
    }

    /// Whether coins flowed out of the viewed account.
    #[must_use]
    pub fn is_outbound(&self) -> bool {
        self.amount < 0
    }
}

/// Composed wallet view: current balance plus all movements that touch the
/// account, newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub balance: u64,
    pub movements: Vec<CoinMovement>,
}

impl WalletInfo {
    /// Movements where this account received coins, newest-first.
    #[must_use]
    pub fn received(&self) -> Vec<&CoinMovement> {
        self.movements.iter().filter(|m| m.is_inbound()).collect()
    }

    /// Movements where this account sent coins, newest-first.
    #[must_use]
    pub fn sent(&self) -> Vec<&CoinMovement> {
        self.movements.iter().filter(|m| m.is_outbound()).collect()
    }
}

/// One line of an account's aggregated inventory: total quantity of a
/// catalog item over all its purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub item: String,
    pub quantity: u64,
}
