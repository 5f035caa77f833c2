//! # coinledger-core
//!
//! **The ledger core**: atomic purchase and transfer operations over the
//! account and history stores, plus the composed wallet read views.
//!
//! ## Architecture
//!
//! The core is invoked with an already-authenticated [`AccountId`] — it
//! never sees transport or tokens. Each operation is one atomic unit:
//!
//! 1. Preconditions (catalog lookup, recipient resolution, balance check)
//! 2. Balance mutation through the checked store operations
//! 3. One history record append
//!
//! A failure at any step unwinds the earlier steps before returning, so
//! no partial effect is ever observable. [`SharedLedger`] serializes
//! concurrent callers around a single [`Ledger`].
//!
//! [`AccountId`]: coinledger_types::AccountId

pub mod ledger;
pub mod shared;
pub mod wallet;

pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use wallet::{inventory, wallet_info};
