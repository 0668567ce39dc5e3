use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use hellodex_client::{keyfile, ops};
use hellodex_core::config::{SwapConfig, SwapSide};
use hellodex_core::instructions::build_swap_instruction;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::args::Cli;
use crate::cmd;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SwapOut {
    pub side: String,
    pub amount: u64,
    pub market: String,
    pub signature: Option<String>,
    /// Set on --dry-run: the payload the program would receive.
    pub payload_hex: Option<String>,
}

pub fn run(
    cli: &Cli,
    side: &str,
    amount: u64,
    config_path: Option<&str>,
    authority_path: &str,
    dry_run: bool,
) -> Result<()> {
    let side: SwapSide = side.parse().map_err(|e| anyhow!("--side: {e}"))?;
    let config = load_config(config_path)?;
    let authority = keyfile::load_keypair(Path::new(authority_path))?;

    if dry_run {
        let keys = config.resolve()?;
        let program_id = cmd::program_id(cli)?;
        let ix = build_swap_instruction(&program_id, &keys, &authority.pubkey(), side, amount)?;
        output::print(&SwapOut {
            side: format!("{side:?}").to_lowercase(),
            amount,
            market: keys.market.to_string(),
            signature: None,
            payload_hex: Some(hex::encode(&ix.data)),
        })?;
        return Ok(());
    }

    let session = cmd::session(cli)?;
    let signature = ops::swap(&session, &config, &authority, side, amount)?;
    let keys = config.resolve()?;

    output::print(&SwapOut {
        side: format!("{side:?}").to_lowercase(),
        amount,
        market: keys.market.to_string(),
        signature: Some(signature.to_string()),
        payload_hex: None,
    })?;
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SwapConfig> {
    let Some(path) = path else {
        return Ok(SwapConfig::serum_devnet());
    };
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read swap config `{path}`: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| anyhow!("invalid swap config `{path}`: {e}"))
}
