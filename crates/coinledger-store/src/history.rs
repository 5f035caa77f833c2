//! History store: append-only record of purchases and transfers.
//!
//! Appends are naturally conflict-free across records, but an append and
//! its matching balance mutation must land in the same atomic unit — the
//! ledger core owns that pairing and rolls the balance back if an append
//! fails. The fault hook below lets tests exercise exactly that path.

use std::collections::BTreeMap;

use chrono::Utc;
use coinledger_types::{
    AccountId, CoinMovement, InventoryLine, LedgerError, Purchase, RecordId, Result,
    TransferKind, TransferRecord,
};

/// Append-only store of purchase and transfer records with a shared
/// sequential [`RecordId`] space.
#[derive(Debug)]
pub struct HistoryStore {
    purchases: Vec<Purchase>,
    transfers: Vec<TransferRecord>,
    next_id: u64,
    /// Armed append failures remaining. Nonzero only in tests.
    fail_next_appends: u32,
}

impl HistoryStore {
    /// Create an empty history store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            purchases: Vec::new(),
            transfers: Vec::new(),
            next_id: 1,
            fail_next_appends: 0,
        }
    }

    /// Arm `n` append failures: each of the next `n` appends returns
    /// [`LedgerError::Storage`] without writing anything.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn fail_next_appends(&mut self, n: u32) {
        self.fail_next_appends = n;
    }

    fn take_fault(&mut self) -> Result<()> {
        if self.fail_next_appends > 0 {
            self.fail_next_appends -= 1;
            return Err(LedgerError::Storage {
                reason: "injected append failure".into(),
            });
        }
        Ok(())
    }

    fn next_record_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a purchase record. The record is immutable once this returns.
    ///
    /// # Errors
    /// Returns [`LedgerError::Storage`] on append failure; nothing is
    /// written in that case.
    pub fn append_purchase(
        &mut self,
        account: AccountId,
        item: &str,
        unit_price: u64,
        quantity: u64,
    ) -> Result<Purchase> {
        self.take_fault()?;
        let record = Purchase {
            id: self.next_record_id(),
            account,
            item: item.to_string(),
            unit_price,
            quantity,
            created_at: Utc::now(),
        };
        self.purchases.push(record.clone());
        Ok(record)
    }

    /// Append a transfer record. The record is immutable once this returns.
    ///
    /// # Errors
    /// Returns [`LedgerError::Storage`] on append failure; nothing is
    /// written in that case.
    pub fn append_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<TransferRecord> {
        self.take_fault()?;
        let record = TransferRecord {
            id: self.next_record_id(),
            from,
            to,
            amount,
            kind: TransferKind::Transfer,
            created_at: Utc::now(),
        };
        self.transfers.push(record.clone());
        Ok(record)
    }

    /// All movements touching `account`, signed relative to it, newest
    /// first. Ties on timestamp break by descending record id, so the
    /// order is total and stable.
    #[must_use]
    pub fn movements_for(&self, account: AccountId) -> Vec<CoinMovement> {
        let mut movements: Vec<CoinMovement> = self
            .transfers
            .iter()
            .filter_map(|t| {
                let amount = i64::try_from(t.amount).unwrap_or(i64::MAX);
                if t.from == account {
                    Some(CoinMovement {
                        record_id: t.id,
                        counterparty: t.to,
                        amount: -amount,
                        kind: t.kind,
                        created_at: t.created_at,
                    })
                } else if t.to == account {
                    Some(CoinMovement {
                        record_id: t.id,
                        counterparty: t.from,
                        amount,
                        kind: t.kind,
                        created_at: t.created_at,
                    })
                } else {
                    None
                }
            })
            .collect();
        movements.sort_by(|a, b| {
            (b.created_at, b.record_id).cmp(&(a.created_at, a.record_id))
        });
        movements
    }

    /// Aggregate an account's purchases by item name, sorted by item name.
    #[must_use]
    pub fn inventory_for(&self, account: AccountId) -> Vec<InventoryLine> {
        let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
        for p in self.purchases.iter().filter(|p| p.account == account) {
            *totals.entry(p.item.as_str()).or_default() += p.quantity;
        }
        totals
            .into_iter()
            .map(|(item, quantity)| InventoryLine {
                item: item.to_string(),
                quantity,
            })
            .collect()
    }

    /// All purchase records for an account, oldest first.
    #[must_use]
    pub fn purchases_for(&self, account: AccountId) -> Vec<&Purchase> {
        self.purchases
            .iter()
            .filter(|p| p.account == account)
            .collect()
    }

    /// Coins an account has spent on purchases, in total.
    #[must_use]
    pub fn spent_by(&self, account: AccountId) -> u64 {
        self.purchases
            .iter()
            .filter(|p| p.account == account)
            .map(Purchase::total_cost)
            .sum()
    }

    /// Coins spent on purchases across all accounts. Purchases are the
    /// only way coins leave circulation, so this is the destroyed side of
    /// the conservation invariant.
    #[must_use]
    pub fn total_spent(&self) -> u64 {
        self.purchases.iter().map(Purchase::total_cost).sum()
    }

    /// Number of committed records (purchases plus transfers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.purchases.len() + self.transfers.len()
    }

    /// Whether no record has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty() && self.transfers.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
