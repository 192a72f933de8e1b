#![no_std]

//! Fungible token ledger contract.
//!
//! The contract keeps a mapping from account to balance. The entire supply is
//! credited to one holder at initialization and is fixed from then on; every
//! later call only moves existing balance between accounts.

pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod queries;
pub mod storage;
pub mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use errors::Error;
pub use types::{AccountSnapshot, TokenMetadata, TransferRequest};

use ledger::Ledger;
use queries::QueryManager;

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedger {
    /// Initialize the ledger, crediting `total_supply` to `holder`.
    ///
    /// Can only succeed once. The holder must authorize the call so a
    /// deployment cannot assign supply to an account without its consent.
    ///
    /// # Errors
    ///
    /// * `AlreadyInitialized` - the ledger was initialized before
    /// * `InvalidSupply` - `total_supply` is negative
    /// * `InvalidName`, `InvalidSymbol`, `InvalidDecimals` - rejected metadata
    pub fn initialize(
        env: Env,
        holder: Address,
        name: String,
        symbol: String,
        decimals: u32,
        total_supply: i128,
    ) -> Result<(), Error> {
        holder.require_auth();
        let metadata = TokenMetadata {
            name,
            symbol,
            decimals,
        };
        Ledger::create(&env, &holder, metadata, total_supply)?;
        Ok(())
    }

    /// Balance of `account`. Returns 0 for accounts never credited and never
    /// fails, even before initialization.
    ///
    /// Does not change any balance, but reading an existing entry extends its
    /// storage TTL.
    pub fn balance_of(env: Env, account: Address) -> i128 {
        Ledger::attach(&env).balance_of(&account)
    }

    /// Move `amount` from `from` to `to`. `from` must authorize the call.
    ///
    /// The transfer is all or nothing: on any error neither balance changes.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` - the ledger has not been initialized
    /// * `InvalidAmount` - `amount` is negative
    /// * `InsufficientBalance` - `from` holds less than `amount`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<bool, Error> {
        from.require_auth();
        Ledger::open(&env)?.transfer(&from, &to, amount)
    }

    /// Apply several transfers from `from` in one atomic call.
    ///
    /// Returns the number of transfers applied. If any leg fails, the whole
    /// batch is rejected with that leg's error and no balance changes.
    pub fn transfer_batch(
        env: Env,
        from: Address,
        transfers: Vec<TransferRequest>,
    ) -> Result<u32, Error> {
        from.require_auth();
        Ledger::open(&env)?.transfer_batch(&from, &transfers)
    }

    /// Fixed total supply; 0 before initialization.
    pub fn total_supply(env: Env) -> i128 {
        Ledger::attach(&env).total_supply()
    }

    /// Token name.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` - the ledger has not been initialized
    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Ledger::open(&env)?.metadata()?.name)
    }

    /// Token ticker symbol.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` - the ledger has not been initialized
    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Ledger::open(&env)?.metadata()?.symbol)
    }

    /// Decimal places used for display.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` - the ledger has not been initialized
    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Ledger::open(&env)?.metadata()?.decimals)
    }

    /// Name, symbol and decimals in one read.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` - the ledger has not been initialized
    pub fn metadata(env: Env) -> Result<TokenMetadata, Error> {
        Ledger::open(&env)?.metadata()
    }

    /// Whether `initialize` has succeeded.
    pub fn is_initialized(env: Env) -> bool {
        Ledger::attach(&env).is_initialized()
    }

    /// Balance, total supply and ledger sequence for `account` in one read.
    pub fn account(env: Env, account: Address) -> AccountSnapshot {
        QueryManager::account_snapshot(&env, account)
    }
}

mod property_based_tests;
