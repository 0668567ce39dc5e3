//! Transaction assembly and submission.
//!
//! The signer set is validated against every `is_signer` descriptor before
//! anything touches the network, so a mismatch fails locally. Submission and
//! confirmation are separate RPC steps: a rejection surfaces as
//! `SubmissionRejected` with the cluster's reason verbatim, while an
//! unconfirmed transaction past the deadline surfaces as
//! `ConfirmationTimeout`. No retries either way.

use std::collections::BTreeSet;
use std::thread;
use std::time::Instant;

use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::context::{Session, CONFIRM_POLL_INTERVAL};
use crate::errors::{ClientError, ClientResult};

/// Wrap `instructions` into one transaction signed by the session payer plus
/// `extra_signers`, submit it and block until confirmation. Returns the
/// transaction signature.
pub fn submit(
    session: &Session,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> ClientResult<Signature> {
    let mut available: Vec<&Keypair> = vec![session.payer()];
    for signer in extra_signers {
        if !available.iter().any(|k| k.pubkey() == signer.pubkey()) {
            available.push(signer);
        }
    }

    let required = required_signers(instructions, &session.payer_pubkey());
    check_signers(&required, &available)?;

    // Only keypairs the message actually requires take part in signing.
    let signing: Vec<&Keypair> = available
        .into_iter()
        .filter(|k| required.contains(&k.pubkey()))
        .collect();

    let blockhash = session.rpc().get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&session.payer_pubkey()),
        &signing,
        blockhash,
    );

    let signature = match session.rpc().send_transaction(&tx) {
        Ok(signature) => signature,
        Err(err) => {
            return Err(ClientError::SubmissionRejected { reason: err.to_string() });
        }
    };
    debug!(%signature, instructions = instructions.len(), "transaction submitted");

    confirm(session, &signature)
}

/// Poll until `signature` confirms or the session deadline elapses.
pub fn confirm(session: &Session, signature: &Signature) -> ClientResult<Signature> {
    let deadline = session.confirm_deadline();
    let started = Instant::now();
    loop {
        if session.rpc().confirm_transaction(signature)? {
            debug!(%signature, elapsed = ?started.elapsed(), "transaction confirmed");
            return Ok(*signature);
        }
        if started.elapsed() >= deadline {
            return Err(ClientError::ConfirmationTimeout { signature: *signature, deadline });
        }
        thread::sleep(CONFIRM_POLL_INTERVAL);
    }
}

/// Every pubkey that must sign: the fee payer plus each `is_signer`
/// descriptor across all instructions.
fn required_signers(instructions: &[Instruction], payer: &Pubkey) -> BTreeSet<Pubkey> {
    let mut required = BTreeSet::new();
    required.insert(*payer);
    for ix in instructions {
        for meta in &ix.accounts {
            if meta.is_signer {
                required.insert(meta.pubkey);
            }
        }
    }
    required
}

fn check_signers(required: &BTreeSet<Pubkey>, available: &[&Keypair]) -> ClientResult<()> {
    for pubkey in required {
        if !available.iter().any(|k| k.pubkey() == *pubkey) {
            return Err(ClientError::SignerMismatch { pubkey: *pubkey });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use solana_sdk::instruction::AccountMeta;

    use super::*;

    fn instruction_with_signer(signer: Pubkey) -> Instruction {
        Instruction {
            program_id: Pubkey::new_unique(),
            accounts: vec![
                AccountMeta::new(signer, true),
                AccountMeta::new_readonly(Pubkey::new_unique(), false),
            ],
            data: vec![7],
        }
    }

    #[test]
    fn required_signers_collects_across_instructions() {
        let payer = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let ixs = vec![instruction_with_signer(a), instruction_with_signer(b)];

        let required = required_signers(&ixs, &payer);
        assert_eq!(required.len(), 3);
        assert!(required.contains(&payer) && required.contains(&a) && required.contains(&b));
    }

    #[test]
    fn missing_keypair_is_a_signer_mismatch() {
        let payer = Keypair::new();
        let authority = Pubkey::new_unique();
        let required = required_signers(&[instruction_with_signer(authority)], &payer.pubkey());

        let err = check_signers(&required, &[&payer]).unwrap_err();
        assert_matches!(err, ClientError::SignerMismatch { pubkey } if pubkey == authority);
    }

    #[test]
    fn submit_fails_before_any_network_call_on_signer_mismatch() {
        // The endpoint is unroutable; reaching the network would error with an
        // RPC failure, not a signer mismatch.
        let session = Session::connect(
            "http://127.0.0.1:1",
            Keypair::new(),
            Pubkey::new_unique(),
        );
        let ix = instruction_with_signer(Pubkey::new_unique());

        let err = submit(&session, &[ix], &[]).unwrap_err();
        assert_matches!(err, ClientError::SignerMismatch { .. });
    }
}
