//! Compile-time configuration for the token ledger.
//!
//! Storage lifetimes are expressed in ledgers. At roughly five seconds per
//! ledger, `DAY_IN_LEDGERS` is one day.

// ===== METADATA CONSTANTS =====

/// Decimals used when a deployment does not pick its own
pub const DEFAULT_DECIMALS: u32 = 18;

/// Maximum supported decimals
pub const MAX_DECIMALS: u32 = 18;

/// Maximum token name length in bytes
pub const MAX_NAME_LENGTH: u32 = 64;

/// Maximum token symbol length in bytes
pub const MAX_SYMBOL_LENGTH: u32 = 16;

// ===== BATCH CONSTANTS =====

/// Maximum number of transfers in a single batch
pub const MAX_BATCH_SIZE: u32 = 25;

// ===== STORAGE TTL CONSTANTS =====

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is extended to this many ledgers on access
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is extended once its TTL drops below this
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Balance entries are extended to this many ledgers on access
pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Balance entries are extended once their TTL drops below this
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
