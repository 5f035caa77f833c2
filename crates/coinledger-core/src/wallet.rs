//! Wallet query service: read-only composition over the two stores.
//!
//! Every query resolves the account first and then reads history, so a
//! missing account fails the whole query — callers get the full composed
//! view or nothing. The functions take `&` stores and perform no mutation;
//! repeated calls with no intervening write return identical results.

use coinledger_store::{AccountStore, HistoryStore};
use coinledger_types::{AccountId, InventoryLine, Result, WalletInfo};

/// Compose an account's current balance with its signed movement history,
/// newest-first.
///
/// # Errors
/// Returns [`coinledger_types::LedgerError::AccountNotFound`] if the
/// account does not exist.
pub fn wallet_info(
    accounts: &AccountStore,
    history: &HistoryStore,
    id: AccountId,
) -> Result<WalletInfo> {
    let balance = accounts.get(id)?.balance;
    let movements = history.movements_for(id);
    tracing::debug!(account = %id, balance, movements = movements.len(), "Wallet view composed");
    Ok(WalletInfo { balance, movements })
}

/// Aggregate an account's purchases into inventory lines, sorted by item
/// name.
///
/// # Errors
/// Returns [`coinledger_types::LedgerError::AccountNotFound`] if the
/// account does not exist.
pub fn inventory(
    accounts: &AccountStore,
    history: &HistoryStore,
    id: AccountId,
) -> Result<Vec<InventoryLine>> {
    accounts.get(id)?;
    Ok(history.inventory_for(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinledger_types::LedgerError;

    fn stores() -> (AccountStore, HistoryStore) {
        (AccountStore::new(1000), HistoryStore::new())
    }

    #[test]
    fn missing_account_fails_whole_query() {
        let (accounts, history) = stores();
        let err = wallet_info(&accounts, &history, AccountId(9)).unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(_)));
        let err = inventory(&accounts, &history, AccountId(9)).unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(_)));
    }

    #[test]
    fn fresh_account_has_empty_views() {
        let (mut accounts, history) = stores();
        let id = accounts.create("alice").unwrap().id;

        let info = wallet_info(&accounts, &history, id).unwrap();
        assert_eq!(info.balance, 1000);
        assert!(info.movements.is_empty());
        assert!(inventory(&accounts, &history, id).unwrap().is_empty());
    }

    #[test]
    fn wallet_view_splits_directions() {
        let (mut accounts, mut history) = stores();
        let alice = accounts.create("alice").unwrap().id;
        let bob = accounts.create("bob").unwrap().id;

        history.append_transfer(alice, bob, 100).unwrap();
        history.append_transfer(bob, alice, 40).unwrap();

        let info = wallet_info(&accounts, &history, alice).unwrap();
        assert_eq!(info.received().len(), 1);
        assert_eq!(info.received()[0].amount, 40);
        assert_eq!(info.sent().len(), 1);
        assert_eq!(info.sent()[0].amount, -100);
    }

    #[test]
    fn reads_do_not_mutate() {
        let (mut accounts, mut history) = stores();
        let alice = accounts.create("alice").unwrap().id;
        let bob = accounts.create("bob").unwrap().id;
        history.append_transfer(alice, bob, 10).unwrap();
        history.append_purchase(alice, "cup", 20, 1).unwrap();

        let first = wallet_info(&accounts, &history, alice).unwrap();
        let second = wallet_info(&accounts, &history, alice).unwrap();
        assert_eq!(first, second);

        let inv_first = inventory(&accounts, &history, alice).unwrap();
        let inv_second = inventory(&accounts, &history, alice).unwrap();
        assert_eq!(inv_first, inv_second);
    }
}
