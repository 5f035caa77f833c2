//! Concurrent handle over the ledger core.
//!
//! One `tokio::sync::RwLock` guards the whole ledger: writers serialize,
//! readers share. That single serialization point is what linearizes
//! operations on the same account — two concurrent transfers from one
//! sender run one after the other, so the second sees the first's debit
//! and the classic lost-update race cannot happen.
//!
//! Every atomic unit runs synchronously while the lock is held, with no
//! await point between first mutation and commit. A caller cancelled
//! before acquiring the lock has changed nothing; once the unit returns,
//! the commit is complete and cancellation has no effect.

use std::sync::Arc;

use tokio::sync::RwLock;

use coinledger_types::{
    Account, AccountId, InventoryLine, Purchase, Result, TransferRecord, WalletInfo,
};

use crate::Ledger;

/// Cheaply cloneable, task-safe handle to a [`Ledger`].
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wrap a ledger for shared use.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// See [`Ledger::ensure_account`].
    pub async fn ensure_account(&self, name: &str) -> Result<Account> {
        self.inner.write().await.ensure_account(name)
    }

    /// See [`Ledger::create_account`].
    pub async fn create_account(&self, name: &str) -> Result<Account> {
        self.inner.write().await.create_account(name)
    }

    /// See [`Ledger::account`].
    pub async fn account(&self, id: AccountId) -> Result<Account> {
        self.inner.read().await.account(id)
    }

    /// See [`Ledger::account_by_name`].
    pub async fn account_by_name(&self, name: &str) -> Result<Account> {
        self.inner.read().await.account_by_name(name)
    }

    /// See [`Ledger::buy`].
    pub async fn buy(&self, buyer: AccountId, item: &str, quantity: u64) -> Result<Purchase> {
        self.inner.write().await.buy(buyer, item, quantity)
    }

    /// See [`Ledger::buy_one`].
    pub async fn buy_one(&self, buyer: AccountId, item: &str) -> Result<Purchase> {
        self.inner.write().await.buy_one(buyer, item)
    }

    /// See [`Ledger::transfer`].
    pub async fn transfer(
        &self,
        from: AccountId,
        to_name: &str,
        amount: u64,
    ) -> Result<TransferRecord> {
        self.inner.write().await.transfer(from, to_name, amount)
    }

    /// See [`Ledger::wallet_info`].
    pub async fn wallet_info(&self, id: AccountId) -> Result<WalletInfo> {
        self.inner.read().await.wallet_info(id)
    }

    /// See [`Ledger::inventory`].
    pub async fn inventory(&self, id: AccountId) -> Result<Vec<InventoryLine>> {
        self.inner.read().await.inventory(id)
    }

    /// See [`Ledger::verify_conservation`].
    pub async fn verify_conservation(&self) -> Result<()> {
        self.inner.read().await.verify_conservation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinledger_types::LedgerError;

    fn shared_with(names: &[&str]) -> (SharedLedger, Vec<AccountId>) {
        let mut ledger = Ledger::with_defaults();
        let ids = names
            .iter()
            .map(|name| ledger.create_account(name).unwrap().id)
            .collect();
        (SharedLedger::new(ledger), ids)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_transfer_race_exactly_one_wins() {
        let (shared, ids) = shared_with(&["alice", "bob"]);
        let alice = ids[0];

        // Two concurrent 600-coin transfers from a 1000-coin account:
        // individually valid, jointly unaffordable.
        let a = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.transfer(alice, "bob", 600).await })
        };
        let b = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.transfer(alice, "bob", 600).await })
        };
        let results = [a.await.unwrap(), b.await.unwrap()];

        let oks = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(oks, 1, "exactly one transfer must win");
        let err = results
            .iter()
            .find_map(|r| r.as_ref().err())
            .expect("one transfer must lose");
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));

        assert_eq!(shared.account(alice).await.unwrap().balance, 400);
        assert_eq!(shared.account(ids[1]).await.unwrap().balance, 1600);
        shared.verify_conservation().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_mixed_workload_conserves_supply() {
        let names = ["a", "b", "c", "d"];
        let (shared, ids) = shared_with(&names);

        let mut tasks = Vec::new();
        for (i, id) in ids.iter().copied().enumerate() {
            let shared = shared.clone();
            let to = names[(i + 1) % names.len()].to_string();
            tasks.push(tokio::spawn(async move {
                for round in 0..50 {
                    if round % 3 == 0 {
                        let _ = shared.buy(id, "pen", 1).await;
                    } else {
                        let _ = shared.transfer(id, &to, 7).await;
                    }
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        shared.verify_conservation().await.unwrap();
    }

    #[tokio::test]
    async fn reader_never_sees_half_a_transfer() {
        let (shared, ids) = shared_with(&["alice", "bob"]);
        let alice = ids[0];

        let writer = {
            let shared = shared.clone();
            tokio::spawn(async move {
                for _ in 0..100 {
                    shared.transfer(alice, "bob", 1).await.unwrap();
                }
            })
        };

        // Balance and movement count must always agree: each committed
        // transfer is one movement and one debited coin.
        for _ in 0..100 {
            let info = shared.wallet_info(alice).await.unwrap();
            let outbound = u64::try_from(info.movements.len()).unwrap();
            assert_eq!(info.balance, 1000 - outbound);
        }
        writer.await.unwrap();

        let info = shared.wallet_info(alice).await.unwrap();
        assert_eq!(info.balance, 900);
        assert_eq!(info.movements.len(), 100);
    }

    #[tokio::test]
    async fn ensure_account_is_concurrent_safe() {
        let shared = SharedLedger::new(Ledger::with_defaults());

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let shared = shared.clone();
            tasks.push(tokio::spawn(
                async move { shared.ensure_account("alice").await },
            ));
        }
        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id);
        }

        // All callers resolved to the same account, one grant total.
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        shared.verify_conservation().await.unwrap();
    }
}
