//! State reads: fetch an account blob and decode it.

use hellodex_core::state::GreetingRecord;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::context::Session;
use crate::errors::{ClientError, ClientResult};

/// Fetch `address` and decode its blob as a [`GreetingRecord`].
pub fn read_greeting(session: &Session, address: &Pubkey) -> ClientResult<GreetingRecord> {
    let account = fetch_account(session, address)?
        .ok_or(ClientError::AccountNotFound { address: *address })?;
    Ok(GreetingRecord::unpack(&account.data)?)
}

/// Raw account lookup; `None` when the address holds nothing.
pub fn fetch_account(session: &Session, address: &Pubkey) -> ClientResult<Option<Account>> {
    let response = session
        .rpc()
        .get_account_with_commitment(address, CommitmentConfig::confirmed())?;
    Ok(response.value)
}

pub fn balance(session: &Session, address: &Pubkey) -> ClientResult<u64> {
    Ok(session.rpc().get_balance(address)?)
}
