use soroban_sdk::Vec;

use crate::config::{MAX_BATCH_SIZE, MAX_DECIMALS, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH};
use crate::errors::Error;
use crate::types::{TokenMetadata, TransferRequest};

/// Input checks shared by the contract entrypoints.
pub struct InputValidator;

impl InputValidator {
    /// Transfer amounts may be zero but never negative.
    pub fn validate_amount(amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    pub fn validate_supply(supply: i128) -> Result<(), Error> {
        if supply < 0 {
            return Err(Error::InvalidSupply);
        }
        Ok(())
    }

    pub fn validate_sufficient_balance(balance: i128, amount: i128) -> Result<(), Error> {
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }
        Ok(())
    }

    pub fn validate_metadata(metadata: &TokenMetadata) -> Result<(), Error> {
        let name_len = metadata.name.len();
        if name_len == 0 || name_len > MAX_NAME_LENGTH {
            return Err(Error::InvalidName);
        }
        let symbol_len = metadata.symbol.len();
        if symbol_len == 0 || symbol_len > MAX_SYMBOL_LENGTH {
            return Err(Error::InvalidSymbol);
        }
        if metadata.decimals > MAX_DECIMALS {
            return Err(Error::InvalidDecimals);
        }
        Ok(())
    }

    pub fn validate_batch(transfers: &Vec<TransferRequest>) -> Result<(), Error> {
        if transfers.is_empty() {
            return Err(Error::EmptyBatch);
        }
        if transfers.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge);
        }
        Ok(())
    }
}
