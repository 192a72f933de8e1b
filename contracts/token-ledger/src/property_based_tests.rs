//! Property tests for the ledger invariants: conservation of supply and
//! atomicity of rejected transfers, over random sequences of transfers.

#![cfg(test)]

extern crate std;

use crate::errors::Error;
use crate::test::{TokenLedgerTest, INITIAL_SUPPLY};
use crate::types::TransferRequest;
use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, Address, Vec};
use std::vec::Vec as StdVec;

const ACCOUNTS: usize = 4;

fn accounts(test: &TokenLedgerTest) -> StdVec<Address> {
    let mut accounts = StdVec::with_capacity(ACCOUNTS);
    accounts.push(test.holder.clone());
    accounts.push(test.user.clone());
    while accounts.len() < ACCOUNTS {
        accounts.push(Address::generate(&test.env));
    }
    accounts
}

fn balances(test: &TokenLedgerTest, accounts: &[Address]) -> StdVec<i128> {
    accounts.iter().map(|a| test.client.balance_of(a)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn supply_is_conserved_across_random_transfers(
        ops in prop::collection::vec((0..ACCOUNTS, 0..ACCOUNTS, 0i128..=INITIAL_SUPPLY), 1..20)
    ) {
        let test = TokenLedgerTest::setup();
        let accounts = accounts(&test);

        for (from, to, amount) in ops {
            let before = balances(&test, &accounts);
            let result = test.client.try_transfer(&accounts[from], &accounts[to], &amount);
            let after = balances(&test, &accounts);

            if before[from] >= amount {
                prop_assert_eq!(result, Ok(Ok(true)));
                if from != to {
                    prop_assert_eq!(after[from], before[from] - amount);
                    prop_assert_eq!(after[to], before[to] + amount);
                } else {
                    prop_assert_eq!(&after, &before);
                }
            } else {
                prop_assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
                prop_assert_eq!(&after, &before);
            }

            let total: i128 = after.iter().sum();
            prop_assert_eq!(total, INITIAL_SUPPLY);
            prop_assert_eq!(test.client.total_supply(), INITIAL_SUPPLY);
        }
    }

    #[test]
    fn rejected_batch_changes_nothing(
        amounts in prop::collection::vec(1i128..=INITIAL_SUPPLY, 2..8)
    ) {
        let test = TokenLedgerTest::setup();
        let accounts = accounts(&test);
        let before = balances(&test, &accounts);

        let mut transfers: Vec<TransferRequest> = Vec::new(&test.env);
        for (i, amount) in amounts.iter().enumerate() {
            transfers.push_back(TransferRequest {
                to: accounts[1 + i % (ACCOUNTS - 1)].clone(),
                amount: *amount,
            });
        }
        // Force the batch over the holder's balance.
        transfers.push_back(TransferRequest {
            to: accounts[1].clone(),
            amount: INITIAL_SUPPLY + 1,
        });

        let result = test.client.try_transfer_batch(&test.holder, &transfers);
        prop_assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
        prop_assert_eq!(balances(&test, &accounts), before);
    }
}
