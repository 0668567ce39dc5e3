//! Client-side error taxonomy.
//!
//! Every variant is terminal for the current operation; nothing in this crate
//! retries. `ConfirmationTimeout` is the one ambiguous outcome: the
//! transaction may still have landed, so the caller must re-query state.

use std::time::Duration;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A descriptor demands a signature but no matching keypair was supplied.
    /// Raised before any network traffic.
    #[error("missing signer: {pubkey} must sign but no keypair was supplied")]
    SignerMismatch { pubkey: Pubkey },

    #[error("transaction rejected by the cluster: {reason}")]
    SubmissionRejected { reason: String },

    #[error("no confirmation for {signature} within {deadline:?}; re-query state to learn the outcome")]
    ConfirmationTimeout { signature: Signature, deadline: Duration },

    #[error("account {address} not found")]
    AccountNotFound { address: Pubkey },

    #[error("program {program_id} is not deployed; deploy it first")]
    ProgramNotDeployed { program_id: Pubkey },

    #[error("account {program_id} exists but is not executable")]
    ProgramNotExecutable { program_id: Pubkey },

    #[error("failed to load key material from `{path}`: {reason}")]
    Keyfile { path: String, reason: String },

    #[error(transparent)]
    Core(#[from] hellodex_core::CoreError),

    #[error("rpc: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}
