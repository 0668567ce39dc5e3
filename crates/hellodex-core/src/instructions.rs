//! Instruction builders for the two deployed programs.
//!
//! Both builders derive the program-state PDA from the configured seed key,
//! bind the convention roles, and attach the fixed payload. They are pure;
//! submission lives in `hellodex-client`.

use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_program::sysvar::rent;

use crate::accounts::{greet_convention, swap_convention, Bindings};
use crate::config::{GreetKeys, SwapKeys, SwapSide};
use crate::errors::CoreResult;
use crate::payload::InstructionPayload;
use crate::pda;

/// Build the greeting instruction against `program_id`, targeting the
/// `greeted` counter account.
pub fn build_greet_instruction(
    program_id: &Pubkey,
    keys: &GreetKeys,
    greeted: &Pubkey,
) -> CoreResult<Instruction> {
    let (derived_state, bump) =
        pda::find_program_address(&[keys.seed_key.as_ref()], program_id)?;

    let bindings = Bindings::new()
        .bind("greeted", *greeted)
        .bind("token_program", keys.token_program)
        .bind("derived_state", derived_state)
        .bind("seed_key", keys.seed_key)
        .bind("swap_program", keys.swap_program);

    Ok(Instruction {
        program_id: *program_id,
        accounts: greet_convention().build(&bindings)?,
        data: InstructionPayload::Greet { bump }.to_bytes(),
    })
}

/// Build one swap instruction. `side` selects the wallet funding the order;
/// `amount` is already in the market's base units.
pub fn build_swap_instruction(
    program_id: &Pubkey,
    keys: &SwapKeys,
    authority: &Pubkey,
    side: SwapSide,
    amount: u64,
) -> CoreResult<Instruction> {
    let (derived_state, bump) =
        pda::find_program_address(&[keys.seed_key.as_ref()], program_id)?;

    let bindings = Bindings::new()
        .bind("market", keys.market)
        .bind("request_queue", keys.request_queue)
        .bind("event_queue", keys.event_queue)
        .bind("bids", keys.bids)
        .bind("asks", keys.asks)
        .bind("coin_vault", keys.coin_vault)
        .bind("pc_vault", keys.pc_vault)
        .bind("vault_signer", keys.vault_signer)
        .bind("open_orders", keys.open_orders)
        .bind("order_payer_token_account", keys.order_payer(side))
        .bind("coin_wallet", keys.coin_wallet)
        .bind("pc_wallet", keys.pc_wallet)
        .bind("authority", *authority)
        .bind("dex_program", keys.dex_program)
        .bind("token_program", keys.token_program)
        .bind("swap_program", keys.swap_program)
        .bind("rent", rent::id())
        .bind("derived_state", derived_state)
        .bind("seed_key", keys.seed_key);

    Ok(Instruction {
        program_id: *program_id,
        accounts: swap_convention().build(&bindings)?,
        data: InstructionPayload::Swap { amount, bump }.to_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GreetConfig, SwapConfig};
    use crate::payload::{decode_greet, decode_swap};

    #[test]
    fn greet_instruction_carries_the_bump() {
        let program_id = Pubkey::new_unique();
        let keys = GreetConfig::default().resolve().unwrap();
        let greeted = Pubkey::new_unique();

        let ix = build_greet_instruction(&program_id, &keys, &greeted).unwrap();
        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[0].pubkey, greeted);
        assert!(ix.accounts[0].is_writable);

        let (expected_state, expected_bump) =
            pda::find_program_address(&[keys.seed_key.as_ref()], &program_id).unwrap();
        assert_eq!(ix.accounts[2].pubkey, expected_state);
        assert_eq!(decode_greet(&ix.data).unwrap(), expected_bump);
    }

    #[test]
    fn swap_instruction_is_parameterized_by_side_and_amount() {
        let program_id = Pubkey::new_unique();
        let keys = SwapConfig::serum_devnet().resolve().unwrap();
        let authority = Pubkey::new_unique();

        let bid = build_swap_instruction(&program_id, &keys, &authority, SwapSide::Bid, 8_100_000)
            .unwrap();
        let ask = build_swap_instruction(&program_id, &keys, &authority, SwapSide::Ask, 200)
            .unwrap();

        assert_eq!(bid.accounts.len(), 19);
        assert_eq!(bid.accounts[9].pubkey, keys.pc_wallet);
        assert_eq!(ask.accounts[9].pubkey, keys.coin_wallet);

        // Only the authority signs.
        assert!(bid.accounts[12].is_signer);
        assert_eq!(bid.accounts[12].pubkey, authority);
        assert_eq!(bid.accounts.iter().filter(|m| m.is_signer).count(), 1);

        let (amount, bump) = decode_swap(&bid.data).unwrap();
        assert_eq!(amount, 8_100_000);
        let (_, expected_bump) =
            pda::find_program_address(&[keys.seed_key.as_ref()], &program_id).unwrap();
        assert_eq!(bump, expected_bump);
    }

    #[test]
    fn same_inputs_build_identical_instructions() {
        let program_id = Pubkey::new_unique();
        let keys = SwapConfig::serum_devnet().resolve().unwrap();
        let authority = Pubkey::new_unique();

        let a = build_swap_instruction(&program_id, &keys, &authority, SwapSide::Bid, 42).unwrap();
        let b = build_swap_instruction(&program_id, &keys, &authority, SwapSide::Bid, 42).unwrap();
        assert_eq!(a, b);
    }
}
