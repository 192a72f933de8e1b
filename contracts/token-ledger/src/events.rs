use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::TokenMetadata;

// ===== EVENT TYPES =====

/// Event emitted once when the ledger is initialized.
///
/// Indexers use it as the genesis record: the whole supply is credited to
/// `holder` and no later event changes `total_supply`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    /// Account credited with the full supply
    pub holder: Address,
    /// Token metadata
    pub metadata: TokenMetadata,
    /// Fixed total supply
    pub total_supply: i128,
    /// Initialization timestamp
    pub timestamp: u64,
}

/// Event emitted for every applied transfer, including each leg of a batch.
///
/// Published under the topics `("transfer", from, to)`, so clients can
/// filter by either party without decoding the payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    /// Amount moved
    pub amount: i128,
    /// Sender balance after the transfer
    pub from_balance: i128,
    /// Recipient balance after the transfer
    pub to_balance: i128,
    /// Transfer timestamp
    pub timestamp: u64,
}

/// Summary emitted after a batch has been applied in full.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchTransferEvent {
    /// Number of legs applied
    pub count: u32,
    /// Sum of all leg amounts, saturating at `i128::MAX`
    pub total_amount: i128,
    /// Sender balance after the batch
    pub from_balance: i128,
    /// Batch timestamp
    pub timestamp: u64,
}

// ===== EVENT EMISSION =====

/// Publishes ledger events.
pub struct EventEmitter;

impl EventEmitter {
    pub fn emit_initialized(
        env: &Env,
        holder: &Address,
        metadata: &TokenMetadata,
        total_supply: i128,
    ) {
        let event = InitializedEvent {
            holder: holder.clone(),
            metadata: metadata.clone(),
            total_supply,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("init"), holder.clone()), event);
    }

    pub fn emit_transfer(
        env: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
        from_balance: i128,
        to_balance: i128,
    ) {
        let event = TransferEvent {
            amount,
            from_balance,
            to_balance,
            timestamp: env.ledger().timestamp(),
        };
        env.events().publish(
            (symbol_short!("transfer"), from.clone(), to.clone()),
            event,
        );
    }

    pub fn emit_batch_transfer(
        env: &Env,
        from: &Address,
        count: u32,
        total_amount: i128,
        from_balance: i128,
    ) {
        let event = BatchTransferEvent {
            count,
            total_amount,
            from_balance,
            timestamp: env.ledger().timestamp(),
        };
        env.events()
            .publish((symbol_short!("batch"), from.clone()), event);
    }
}
