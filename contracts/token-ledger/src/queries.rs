use soroban_sdk::{Address, Env};

use crate::ledger::Ledger;
use crate::types::AccountSnapshot;

/// Read-only views for clients that poll the ledger.
///
/// None of these functions write state; polling them repeatedly with no
/// intervening transfer returns the same values.
pub struct QueryManager;

impl QueryManager {
    /// Snapshot of one account together with the ledger position it was
    /// read at, so a polling client can tell stale responses apart.
    pub fn account_snapshot(env: &Env, account: Address) -> AccountSnapshot {
        let ledger = Ledger::attach(env);
        AccountSnapshot {
            balance: ledger.balance_of(&account),
            total_supply: ledger.total_supply(),
            ledger_sequence: env.ledger().sequence(),
            account,
        }
    }
}
