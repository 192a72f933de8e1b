use soroban_sdk::{log, Address, Env, Map, Vec};

use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::LedgerStorage;
use crate::types::{TokenMetadata, TransferRequest};
use crate::validation::InputValidator;

/// Scoped accessor over the balance ledger.
///
/// A `Ledger` borrows the contract environment for the duration of one
/// invocation and is the only path that mutates balances. It upholds two
/// rules:
/// - the ledger is initialized exactly once, with the whole supply credited
///   to a single holder;
/// - every later mutation moves existing supply, so the sum of all balances
///   always equals `total_supply`.
///
/// Authorization of the sender is the caller's concern; the contract
/// entrypoints call `require_auth` before handing off here.
pub struct Ledger<'a> {
    env: &'a Env,
}

impl<'a> Ledger<'a> {
    /// Attach to ledger storage without checking the lifecycle.
    ///
    /// Only reads that are well-defined before initialization go through an
    /// attached ledger.
    pub(crate) fn attach(env: &'a Env) -> Self {
        Self { env }
    }

    /// Open an initialized ledger.
    pub fn open(env: &'a Env) -> Result<Self, Error> {
        if !LedgerStorage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        LedgerStorage::bump_instance(env);
        Ok(Self { env })
    }

    /// Initialize the ledger and credit `total_supply` to `holder`.
    ///
    /// This is the one irreversible transition out of the uninitialized
    /// state; a second call fails with `AlreadyInitialized`.
    pub fn create(
        env: &'a Env,
        holder: &Address,
        metadata: TokenMetadata,
        total_supply: i128,
    ) -> Result<Self, Error> {
        if LedgerStorage::is_initialized(env) {
            return Err(Error::AlreadyInitialized);
        }
        InputValidator::validate_metadata(&metadata)?;
        InputValidator::validate_supply(total_supply)?;

        LedgerStorage::set_metadata(env, &metadata);
        LedgerStorage::set_total_supply(env, total_supply);
        LedgerStorage::set_balance(env, holder, total_supply);
        LedgerStorage::mark_initialized(env);
        LedgerStorage::bump_instance(env);

        EventEmitter::emit_initialized(env, holder, &metadata, total_supply);
        log!(env, "ledger initialized", holder.clone(), total_supply);

        Ok(Self { env })
    }

    pub fn is_initialized(&self) -> bool {
        LedgerStorage::is_initialized(self.env)
    }

    /// Balance of `account`; 0 for accounts never credited.
    pub fn balance_of(&self, account: &Address) -> i128 {
        LedgerStorage::get_balance(self.env, account)
    }

    pub fn total_supply(&self) -> i128 {
        LedgerStorage::get_total_supply(self.env)
    }

    pub fn metadata(&self) -> Result<TokenMetadata, Error> {
        LedgerStorage::get_metadata(self.env).ok_or(Error::NotInitialized)
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// All checks run before the first write, so a failed transfer leaves
    /// both balances untouched. Returns `true` once applied.
    pub fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<bool, Error> {
        InputValidator::validate_amount(amount)?;

        let from_balance = self.balance_of(from);
        InputValidator::validate_sufficient_balance(from_balance, amount)?;

        let (new_from, new_to) = if from == to {
            (from_balance, from_balance)
        } else {
            let to_balance = self.balance_of(to);
            let new_from = from_balance.checked_sub(amount).ok_or(Error::Overflow)?;
            let new_to = to_balance.checked_add(amount).ok_or(Error::Overflow)?;
            LedgerStorage::set_balance(self.env, from, new_from);
            LedgerStorage::set_balance(self.env, to, new_to);
            (new_from, new_to)
        };

        EventEmitter::emit_transfer(self.env, from, to, amount, new_from, new_to);
        log!(self.env, "transfer", from.clone(), to.clone(), amount);

        Ok(true)
    }

    /// Apply a batch of transfers from one sender, all or nothing.
    ///
    /// Legs are applied in order against a staged copy of the touched
    /// balances, so each leg sees the balance left by the legs before it. The
    /// staged balances are written back only after every leg has passed; the
    /// first failing leg aborts the batch with its error.
    pub fn transfer_batch(
        &self,
        from: &Address,
        transfers: &Vec<TransferRequest>,
    ) -> Result<u32, Error> {
        InputValidator::validate_batch(transfers)?;

        let mut staged: Map<Address, i128> = Map::new(self.env);
        let mut applied: Vec<(Address, i128, i128, i128)> = Vec::new(self.env);
        let mut total_amount: i128 = 0;

        for request in transfers.iter() {
            InputValidator::validate_amount(request.amount)?;

            let from_balance = self.staged_balance(&staged, from);
            InputValidator::validate_sufficient_balance(from_balance, request.amount)?;
            // Summary statistic only; self-legs can push it past i128::MAX.
            total_amount = total_amount.saturating_add(request.amount);

            if request.to == *from {
                applied.push_back((request.to, request.amount, from_balance, from_balance));
                continue;
            }

            let to_balance = self.staged_balance(&staged, &request.to);
            let new_from = from_balance
                .checked_sub(request.amount)
                .ok_or(Error::Overflow)?;
            let new_to = to_balance
                .checked_add(request.amount)
                .ok_or(Error::Overflow)?;
            staged.set(from.clone(), new_from);
            staged.set(request.to.clone(), new_to);
            applied.push_back((request.to, request.amount, new_from, new_to));
        }

        for (account, balance) in staged.iter() {
            LedgerStorage::set_balance(self.env, &account, balance);
        }

        for (to, amount, from_balance, to_balance) in applied.iter() {
            EventEmitter::emit_transfer(self.env, from, &to, amount, from_balance, to_balance);
        }

        let count = applied.len();
        let final_balance = self.balance_of(from);
        EventEmitter::emit_batch_transfer(self.env, from, count, total_amount, final_balance);
        log!(self.env, "batch transfer", from.clone(), count, total_amount);

        Ok(count)
    }

    fn staged_balance(&self, staged: &Map<Address, i128>, account: &Address) -> i128 {
        match staged.get(account.clone()) {
            Some(balance) => balance,
            None => self.balance_of(account),
        }
    }
}
