//! Session context threaded through every client operation.
//!
//! One value owns the RPC handle, the fee payer and the target program id,
//! replacing what used to be process-wide globals. Constructing a session is
//! purely local; the first network round-trip happens on the first call that
//! needs one.

use std::time::Duration;

use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::errors::ClientResult;

/// Default deadline for transaction confirmation polling.
pub const DEFAULT_CONFIRM_DEADLINE: Duration = Duration::from_secs(30);

/// Interval between confirmation polls.
pub const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct Session {
    rpc: RpcClient,
    payer: Keypair,
    program_id: Pubkey,
    confirm_deadline: Duration,
}

impl Session {
    /// Open a session at `confirmed` commitment.
    pub fn connect(url: &str, payer: Keypair, program_id: Pubkey) -> Self {
        let rpc = RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed());
        Self { rpc, payer, program_id, confirm_deadline: DEFAULT_CONFIRM_DEADLINE }
    }

    pub fn with_confirm_deadline(mut self, deadline: Duration) -> Self {
        self.confirm_deadline = deadline;
        self
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn confirm_deadline(&self) -> Duration {
        self.confirm_deadline
    }

    /// Version string of the cluster behind the RPC endpoint.
    pub fn cluster_version(&self) -> ClientResult<String> {
        Ok(self.rpc.get_version()?.solana_core)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("url", &self.rpc.url())
            .field("payer", &self.payer.pubkey())
            .field("program_id", &self.program_id)
            .field("confirm_deadline", &self.confirm_deadline)
            .finish()
    }
}
