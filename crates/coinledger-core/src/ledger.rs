//! The ledger core: every balance mutation goes through here.
//!
//! Each operation is one atomic unit over the account and history stores.
//! Preconditions are checked against the same exclusive borrow that
//! applies the mutation, and a history append failure rolls the balance
//! changes back before the error is returned — no caller or reader ever
//! observes a partial effect.

use coinledger_store::{AccountStore, HistoryStore};
use coinledger_types::{
    Account, AccountId, InventoryLine, LedgerConfig, LedgerError, PriceCatalog, Purchase,
    Result, TransferRecord, WalletInfo,
};

use crate::wallet;

/// Single-writer ledger over the account store, history store, and price
/// catalog. Wrap it in [`crate::SharedLedger`] to serve concurrent callers.
#[derive(Debug)]
pub struct Ledger {
    accounts: AccountStore,
    history: HistoryStore,
    catalog: PriceCatalog,
}

impl Ledger {
    /// Build a ledger from a validated configuration.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] if the configuration is
    /// invalid (zero grant, zero-priced catalog entry).
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            accounts: AccountStore::new(config.initial_grant),
            history: HistoryStore::new(),
            catalog: config.catalog,
        })
    }

    /// Build a ledger with the default grant and stock catalog.
    ///
    /// # Panics
    /// Never panics: the default configuration is statically valid.
    #[must_use]
    pub fn with_defaults() -> Self {
        match Self::new(LedgerConfig::default()) {
            Ok(ledger) => ledger,
            Err(_) => unreachable!("default configuration is valid"),
        }
    }

    /// The price catalog this ledger sells from.
    #[must_use]
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    // =====================================================================
    // Account bootstrap
    // =====================================================================

    /// Fetch the account with this name, creating it with the initial
    /// grant on first reference. The auth layer calls this on login.
    ///
    /// # Errors
    /// Propagates store failures; a fresh name never fails.
    pub fn ensure_account(&mut self, name: &str) -> Result<Account> {
        match self.accounts.get_by_name(name) {
            Ok(account) => Ok(account.clone()),
            Err(LedgerError::NameNotFound { .. }) => self.accounts.create(name),
            Err(err) => Err(err),
        }
    }

    /// Create an account outright.
    ///
    /// # Errors
    /// Returns [`LedgerError::NameTaken`] if the name is in use.
    pub fn create_account(&mut self, name: &str) -> Result<Account> {
        self.accounts.create(name)
    }

    /// Look up an account by identity.
    ///
    /// # Errors
    /// Returns [`LedgerError::AccountNotFound`] if absent.
    pub fn account(&self, id: AccountId) -> Result<Account> {
        self.accounts.get(id).cloned()
    }

    /// Look up an account by display name.
    ///
    /// # Errors
    /// Returns [`LedgerError::NameNotFound`] if absent.
    pub fn account_by_name(&self, name: &str) -> Result<Account> {
        self.accounts.get_by_name(name).cloned()
    }

    // =====================================================================
    // Purchase
    // =====================================================================

    /// Buy `quantity` units of a catalog item, debiting the buyer and
    /// appending one purchase record in a single atomic unit.
    ///
    /// # Errors
    /// - [`LedgerError::InvalidQuantity`] if `quantity` is zero.
    /// - [`LedgerError::InvalidItem`] if the item is not in the catalog.
    /// - [`LedgerError::BalanceOverflow`] if the total cost overflows.
    /// - [`LedgerError::AccountNotFound`] if the buyer is absent.
    /// - [`LedgerError::InsufficientFunds`] if the balance cannot cover
    ///   the cost; nothing is written.
    /// - [`LedgerError::Storage`] if the record append fails; the debit
    ///   is rolled back.
    pub fn buy(&mut self, buyer: AccountId, item: &str, quantity: u64) -> Result<Purchase> {
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity { quantity });
        }
        let unit_price = self
            .catalog
            .price(item)
            .ok_or_else(|| LedgerError::InvalidItem {
                item: item.to_string(),
            })?;
        let total = unit_price
            .checked_mul(quantity)
            .ok_or(LedgerError::BalanceOverflow)?;

        if let Err(err) = self.accounts.debit(buyer, total) {
            tracing::warn!(account = %buyer, item, total, %err, "Purchase rejected");
            return Err(err);
        }

        match self.history.append_purchase(buyer, item, unit_price, quantity) {
            Ok(record) => {
                tracing::info!(
                    account = %buyer,
                    item,
                    unit_price,
                    quantity,
                    record = %record.id,
                    "Purchase committed"
                );
                Ok(record)
            }
            Err(err) => {
                // Undo the debit so the unit leaves no partial effect.
                self.accounts.credit(buyer, total)?;
                tracing::warn!(account = %buyer, item, %err, "Purchase aborted, debit rolled back");
                Err(err)
            }
        }
    }

    /// Buy a single unit of a catalog item — the shape the exposed API
    /// uses.
    ///
    /// # Errors
    /// Same as [`Self::buy`].
    pub fn buy_one(&mut self, buyer: AccountId, item: &str) -> Result<Purchase> {
        self.buy(buyer, item, coinledger_types::constants::SINGLE_PURCHASE_QUANTITY)
    }

    // =====================================================================
    // Transfer
    // =====================================================================

    /// Move `amount` coins from `from` to the account named `to_name`,
    /// appending one transfer record in the same atomic unit.
    ///
    /// # Errors
    /// - [`LedgerError::NonPositiveAmount`] if `amount` is zero. The
    ///   upstream API already rejects these; the core refuses them too.
    /// - [`LedgerError::RecipientNotFound`] if `to_name` does not resolve.
    /// - [`LedgerError::SelfTransfer`] if sender and recipient coincide.
    /// - [`LedgerError::AccountNotFound`] if the sender is absent.
    /// - [`LedgerError::InsufficientFunds`] if the sender balance is too
    ///   small; nothing is written.
    /// - [`LedgerError::Storage`] if the record append fails; both
    ///   balance mutations are rolled back.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to_name: &str,
        amount: u64,
    ) -> Result<TransferRecord> {
        if amount == 0 {
            return Err(LedgerError::NonPositiveAmount { amount });
        }
        let to = match self.accounts.get_by_name(to_name) {
            Ok(account) => account.id,
            Err(LedgerError::NameNotFound { name }) => {
                return Err(LedgerError::RecipientNotFound { name });
            }
            Err(err) => return Err(err),
        };
        if to == from {
            return Err(LedgerError::SelfTransfer(from));
        }

        if let Err(err) = self.accounts.debit(from, amount) {
            tracing::warn!(from = %from, to = %to, amount, %err, "Transfer rejected");
            return Err(err);
        }
        if let Err(err) = self.accounts.credit(to, amount) {
            self.accounts.credit(from, amount)?;
            return Err(err);
        }

        match self.history.append_transfer(from, to, amount) {
            Ok(record) => {
                tracing::info!(
                    from = %from,
                    to = %to,
                    amount,
                    record = %record.id,
                    "Transfer committed"
                );
                Ok(record)
            }
            Err(err) => {
                // Undo both legs so the unit leaves no partial effect.
                self.accounts.debit(to, amount)?;
                self.accounts.credit(from, amount)?;
                tracing::warn!(from = %from, to = %to, %err, "Transfer aborted, balances rolled back");
                Err(err)
            }
        }
    }

    // =====================================================================
    // Read views
    // =====================================================================

    /// Current balance plus signed movement history, newest-first.
    ///
    /// # Errors
    /// Returns [`LedgerError::AccountNotFound`] if the account is absent.
    pub fn wallet_info(&self, id: AccountId) -> Result<WalletInfo> {
        wallet::wallet_info(&self.accounts, &self.history, id)
    }

    /// Aggregated inventory for an account, sorted by item name.
    ///
    /// # Errors
    /// Returns [`LedgerError::AccountNotFound`] if the account is absent.
    pub fn inventory(&self, id: AccountId) -> Result<Vec<InventoryLine>> {
        wallet::inventory(&self.accounts, &self.history, id)
    }

    // =====================================================================
    // Invariants
    // =====================================================================

    /// Verify the fixed-supply invariant:
    /// `Σ balances + Σ purchase spend == Σ initial grants`.
    ///
    /// Transfers move coins and purchases retire them; neither mints.
    /// If the books don't balance, something has gone catastrophically
    /// wrong and the caller should halt.
    ///
    /// # Errors
    /// Returns [`LedgerError::ConservationViolation`] when the sums
    /// disagree.
    pub fn verify_conservation(&self) -> Result<()> {
        let circulating = self.accounts.total_supply();
        let spent = self.history.total_spent();
        let granted = self.accounts.total_granted();
        let actual = circulating.checked_add(spent).ok_or(LedgerError::BalanceOverflow)?;
        if actual != granted {
            return Err(LedgerError::ConservationViolation {
                reason: format!(
                    "circulating {circulating} + spent {spent} != granted {granted}"
                ),
            });
        }
        Ok(())
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }
}
