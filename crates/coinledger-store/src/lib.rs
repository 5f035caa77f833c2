//! # coinledger-store
//!
//! **Storage plane**: the durable collections behind the ledger core.
//!
//! - [`AccountStore`] — account identity and balance, with a unique-name
//!   index and the checked `debit`/`credit` pair.
//! - [`HistoryStore`] — append-only purchase and transfer records, plus
//!   the per-account read queries (signed movements, inventory, spend
//!   totals) the wallet view composes from.
//!
//! Neither store is safe to share across threads on its own; the ledger
//! core serializes access so each operation sees and leaves a consistent
//! pair of stores. The `test-helpers` feature exposes the history fault
//! hook used by atomicity tests.

pub mod accounts;
pub mod history;

pub use accounts::AccountStore;
pub use history::HistoryStore;
