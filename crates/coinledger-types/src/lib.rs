//! # coinledger-types
//!
//! Shared types, errors, and configuration for the **coinledger** workspace.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`RecordId`]
//! - **Account model**: [`Account`]
//! - **Catalog**: [`PriceCatalog`]
//! - **History records**: [`Purchase`], [`TransferRecord`], [`TransferKind`]
//! - **Wallet views**: [`WalletInfo`], [`CoinMovement`], [`InventoryLine`]
//! - **Configuration**: [`LedgerConfig`]
//! - **Errors**: [`LedgerError`] with `LG_ERR_` prefix codes
//! - **Constants**: initial grant and defaults

pub mod account;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod record;
pub mod wallet;

// Re-export all primary types at crate root for ergonomic imports:
//   use coinledger_types::{Account, AccountId, LedgerError, ...};

pub use account::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use record::*;
pub use wallet::*;

// Constants are accessed via `coinledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
