//! Error types for the coinledger workspace.
//!
//! All errors use the `LG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Account errors
//! - 2xx: Balance errors
//! - 3xx: Catalog / purchase errors
//! - 4xx: Transfer errors
//! - 9xx: Storage / internal errors

use thiserror::Error;

use crate::AccountId;

/// Central error enum for all coinledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Account Errors (1xx)
    // =================================================================
    /// The referenced account does not exist.
    #[error("LG_ERR_100: Account not found: {0}")]
    AccountNotFound(AccountId),

    /// No account carries the given display name.
    #[error("LG_ERR_101: No account named {name:?}")]
    NameNotFound { name: String },

    /// The display name is already taken (names are unique and immutable).
    #[error("LG_ERR_102: Account name already taken: {name:?}")]
    NameTaken { name: String },

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// Not enough coins to cover the operation. The balance is unchanged.
    #[error("LG_ERR_200: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// A balance or cost computation would overflow the coin type.
    #[error("LG_ERR_201: Coin amount overflow")]
    BalanceOverflow,

    /// The fixed-supply invariant broke: coins were created or destroyed.
    #[error("LG_ERR_202: Conservation violation: {reason}")]
    ConservationViolation { reason: String },

    // =================================================================
    // Catalog / Purchase Errors (3xx)
    // =================================================================
    /// The item is not in the price catalog.
    #[error("LG_ERR_300: Unknown catalog item: {item:?}")]
    InvalidItem { item: String },

    /// Purchase quantity must be at least 1.
    #[error("LG_ERR_301: Invalid purchase quantity: {quantity}")]
    InvalidQuantity { quantity: u64 },

    // =================================================================
    // Transfer Errors (4xx)
    // =================================================================
    /// The transfer recipient name did not resolve to an account.
    #[error("LG_ERR_400: Transfer recipient not found: {name:?}")]
    RecipientNotFound { name: String },

    /// Transfer amounts must be strictly positive.
    #[error("LG_ERR_401: Transfer amount must be positive, got {amount}")]
    NonPositiveAmount { amount: u64 },

    /// Sender and recipient are the same account.
    #[error("LG_ERR_402: Self-transfer rejected for {0}")]
    SelfTransfer(AccountId),

    // =================================================================
    // Storage / Internal (9xx)
    // =================================================================
    /// Transient storage failure. The enclosing atomic unit was rolled
    /// back in full; the caller may retry.
    #[error("LG_ERR_900: Storage failure: {reason}")]
    Storage { reason: String },

    /// Configuration error (invalid catalog, bad grant, unparsable file).
    #[error("LG_ERR_901: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;
