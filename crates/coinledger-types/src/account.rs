//! Account model: a named participant holding a coin balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A ledger account. Identity and name are immutable after creation; the
/// balance is mutated only by the account store inside an atomic unit.
///
/// The balance is a `u64`, so a negative balance is unrepresentable —
/// non-negativity is enforced by construction plus checked arithmetic,
/// not by a runtime assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, immutable identity.
    pub id: AccountId,
    /// Unique, immutable display name.
    pub name: String,
    /// Current coin balance. Never negative.
    pub balance: u64,
    /// When the account was created (first referenced).
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with its initial grant. This is the only way new
    /// coins enter circulation.
    #[must_use]
    pub fn with_grant(id: AccountId, name: impl Into<String>, grant: u64) -> Self {
        Self {
            id,
            name: name.into(),
            balance: grant,
            created_at: Utc::now(),
        }
    }
}
