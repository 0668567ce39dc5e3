use anyhow::Result;
use hellodex_client::reader;
use serde::Serialize;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::args::Cli;
use crate::cmd;
use crate::output;

#[derive(Debug, Serialize)]
pub struct BalanceOut {
    pub address: String,
    pub lamports: u64,
    pub sol: f64,
}

pub fn run(cli: &Cli) -> Result<()> {
    let session = cmd::session(cli)?;
    let address = session.payer_pubkey();
    let lamports = reader::balance(&session, &address)?;

    output::print(&BalanceOut {
        address: address.to_string(),
        lamports,
        sol: lamports as f64 / LAMPORTS_PER_SOL as f64,
    })?;
    Ok(())
}
