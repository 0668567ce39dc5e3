//! High-level client operations: program checks, greeting account setup,
//! greet and swap flows. Each operation runs to completion or surfaces the
//! first error; there is no retry logic at this level.

use hellodex_core::config::{GreetConfig, SwapConfig, SwapSide};
use hellodex_core::constants::GREETING_SEED;
use hellodex_core::instructions::{build_greet_instruction, build_swap_instruction};
use hellodex_core::pda;
use hellodex_core::state::GREETING_RECORD_LEN;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::system_instruction;
use tracing::info;

use crate::context::Session;
use crate::errors::{ClientError, ClientResult};
use crate::reader;
use crate::submit;

/// Verify the target program exists and is executable.
pub fn check_program(session: &Session) -> ClientResult<()> {
    let program_id = session.program_id();
    let account = reader::fetch_account(session, &program_id)?
        .ok_or(ClientError::ProgramNotDeployed { program_id })?;
    if !account.executable {
        return Err(ClientError::ProgramNotExecutable { program_id });
    }
    Ok(())
}

/// The greeting account address: payer + `"hello"` + program id. Stable
/// across calls for a fixed session.
pub fn greeted_address(session: &Session) -> ClientResult<Pubkey> {
    Ok(pda::derive_with_seed(
        &session.payer_pubkey(),
        GREETING_SEED,
        &session.program_id(),
    )?)
}

/// Create the greeting account if it does not exist yet, funding it to rent
/// exemption. Returns its address either way.
pub fn ensure_greeting_account(session: &Session) -> ClientResult<Pubkey> {
    let greeted = greeted_address(session)?;
    if reader::fetch_account(session, &greeted)?.is_some() {
        return Ok(greeted);
    }

    info!(%greeted, "creating greeting account");
    let lamports = session
        .rpc()
        .get_minimum_balance_for_rent_exemption(GREETING_RECORD_LEN)?;
    let payer = session.payer_pubkey();
    let ix = system_instruction::create_account_with_seed(
        &payer,
        &greeted,
        &payer,
        GREETING_SEED,
        lamports,
        GREETING_RECORD_LEN as u64,
        &session.program_id(),
    );
    submit::submit(session, &[ix], &[])?;
    Ok(greeted)
}

/// Send one greeting. Creates the greeting account on first use.
pub fn greet(session: &Session, config: &GreetConfig) -> ClientResult<Signature> {
    let keys = config.resolve()?;
    let greeted = ensure_greeting_account(session)?;
    let ix = build_greet_instruction(&session.program_id(), &keys, &greeted)?;
    info!(%greeted, "saying hello");
    submit::submit(session, &[ix], &[])
}

/// Submit one swap. The authority keypair signs alongside the payer.
pub fn swap(
    session: &Session,
    config: &SwapConfig,
    authority: &Keypair,
    side: SwapSide,
    amount: u64,
) -> ClientResult<Signature> {
    let keys = config.resolve()?;
    let ix = build_swap_instruction(
        &session.program_id(),
        &keys,
        &authority.pubkey(),
        side,
        amount,
    )?;
    info!(side = ?side, amount, market = %keys.market, "submitting swap");
    submit::submit(session, &[ix], &[authority])
}
