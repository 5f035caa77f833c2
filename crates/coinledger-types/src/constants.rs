//! System-wide constants and defaults.

/// Coins granted to every account at creation. Account creation is the only
/// way coins enter circulation, so total supply is always
/// `INITIAL_GRANT × accounts created` (spent coins included).
pub const INITIAL_GRANT: u64 = 1000;

/// Quantity used by the exposed single-item purchase operation.
pub const SINGLE_PURCHASE_QUANTITY: u64 = 1;
