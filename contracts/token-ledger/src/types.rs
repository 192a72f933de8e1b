use soroban_sdk::{contracttype, Address, String};

/// Descriptive token fields fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    /// Human-readable token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Number of decimal places used for display
    pub decimals: u32,
}

/// One leg of a batched transfer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRequest {
    /// Account credited by this leg
    pub to: Address,
    /// Amount moved
    pub amount: i128,
}

/// Point-in-time view of an account, meant for client polling.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountSnapshot {
    /// Queried account
    pub account: Address,
    /// Balance at `ledger_sequence`
    pub balance: i128,
    /// Fixed total supply
    pub total_supply: i128,
    /// Ledger sequence the snapshot was read at
    pub ledger_sequence: u32,
}
