//! Account store: the durable home for account identity and balance.
//!
//! The store is the single owner of every [`Account`]; nothing outside the
//! ledger core mutates balances, and the core only does so through the
//! checked `debit`/`credit` pair inside an atomic unit. Both operations
//! leave the balance untouched on failure.

use std::collections::HashMap;

use coinledger_types::{Account, AccountId, LedgerError, Result};

/// In-memory account store with a unique-name index.
///
/// Identity assignment is sequential starting at 1, mirroring a serial
/// primary key. `granted` accumulates every initial grant ever handed out,
/// which is the fixed-supply side of the conservation invariant.
#[derive(Debug)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Account>,
    by_name: HashMap<String, AccountId>,
    next_id: u64,
    initial_grant: u64,
    granted: u64,
}

impl AccountStore {
    /// Create an empty store. Every account created later starts with
    /// `initial_grant` coins.
    #[must_use]
    pub fn new(initial_grant: u64) -> Self {
        Self {
            accounts: HashMap::new(),
            by_name: HashMap::new(),
            next_id: 1,
            initial_grant,
            granted: 0,
        }
    }

    /// Create an account with the configured initial grant.
    ///
    /// # Errors
    /// Returns [`LedgerError::NameTaken`] if the name is already in use.
    pub fn create(&mut self, name: &str) -> Result<Account> {
        if self.by_name.contains_key(name) {
            return Err(LedgerError::NameTaken {
                name: name.to_string(),
            });
        }
        let id = AccountId(self.next_id);
        self.next_id += 1;

        let account = Account::with_grant(id, name, self.initial_grant);
        self.by_name.insert(account.name.clone(), id);
        self.accounts.insert(id, account.clone());
        self.granted += self.initial_grant;

        tracing::info!(account = %id, name, grant = self.initial_grant, "Account created");
        Ok(account)
    }

    /// Look up an account by identity.
    ///
    /// # Errors
    /// Returns [`LedgerError::AccountNotFound`] if absent.
    pub fn get(&self, id: AccountId) -> Result<&Account> {
        self.accounts
            .get(&id)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    /// Look up an account by display name.
    ///
    /// # Errors
    /// Returns [`LedgerError::NameNotFound`] if absent.
    pub fn get_by_name(&self, name: &str) -> Result<&Account> {
        let id = self.by_name.get(name).ok_or_else(|| LedgerError::NameNotFound {
            name: name.to_string(),
        })?;
        self.get(*id)
    }

    /// Subtract `amount` coins from an account.
    ///
    /// The precondition `balance ≥ amount` is checked and applied against
    /// the same borrowed entry, so no concurrent mutation can interleave.
    ///
    /// # Errors
    /// - [`LedgerError::AccountNotFound`] if the account is absent.
    /// - [`LedgerError::InsufficientFunds`] if the balance is too small;
    ///   the balance is unchanged.
    pub fn debit(&mut self, id: AccountId, amount: u64) -> Result<()> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: account.balance,
            });
        }
        account.balance -= amount;
        Ok(())
    }

    /// Add `amount` coins to an account.
    ///
    /// # Errors
    /// - [`LedgerError::AccountNotFound`] if the account is absent.
    /// - [`LedgerError::BalanceOverflow`] if the balance would overflow;
    ///   the balance is unchanged.
    pub fn credit(&mut self, id: AccountId, amount: u64) -> Result<()> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    /// Sum of all current balances.
    #[must_use]
    pub fn total_supply(&self) -> u64 {
        self.accounts.values().map(|a| a.balance).sum()
    }

    /// Sum of all initial grants ever handed out.
    #[must_use]
    pub fn total_granted(&self) -> u64 {
        self.granted
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate all accounts (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}
