//! History records: append-only facts about purchases and transfers.
//!
//! A committed record is immutable. History is strictly append-only; the
//! stores never update or delete a record once written.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, RecordId};

/// Kind of a coin movement. Only peer-to-peer transfers exist today; the
/// enum leaves room for future kinds (grants, refunds) without a schema
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Transfer,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "transfer"),
        }
    }
}

/// A committed purchase: one catalog item bought at its price at the time
/// of purchase. Quantity is 1 through the exposed API but the record
/// supports batched quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub account: AccountId,
    pub item: String,
    /// Unit price at the time of purchase. Later catalog changes never
    /// rewrite committed records.
    pub unit_price: u64,
    pub quantity: u64,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Total coins paid for this purchase. Overflow was checked before the
    /// record was committed.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// A committed transfer: one directed coin movement between two accounts.
///
/// One logical record per transfer; the wallet view derives signed
/// inbound/outbound entries for each side from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: RecordId,
    pub from: AccountId,
    pub to: AccountId,
    pub amount: u64,
    pub kind: TransferKind,
    pub created_at: DateTime<Utc>,
}
