use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use hellodex_client::{keyfile, Session};
use solana_sdk::pubkey::Pubkey;

use crate::args::{Cli, Command};

mod balance;
mod doctor;
mod greet;
mod report;
mod swap;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Command::Greet => greet::run(&cli),
        Command::Report => report::run(&cli),
        Command::Swap { side, amount, config, authority, dry_run } => {
            swap::run(&cli, &side, amount, config.as_deref(), &authority, dry_run)
        }
        Command::Balance => balance::run(&cli),
        Command::Doctor => doctor::run(&cli),
    }
}

/// Open a session from the global flags.
pub fn session(cli: &Cli) -> Result<Session> {
    let payer = keyfile::load_keypair(&payer_path(cli)?)?;
    let program_id = program_id(cli)?;
    Ok(Session::connect(&cli.url, payer, program_id))
}

pub fn payer_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.payer {
        return Ok(PathBuf::from(path));
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("--payer not given and HOME is unset"))?;
    Ok(PathBuf::from(home).join(".config").join("solana").join("id.json"))
}

pub fn program_id(cli: &Cli) -> Result<Pubkey> {
    if let Some(id) = &cli.program_id {
        return id.parse().map_err(|_| anyhow!("invalid --program-id: {id}"));
    }
    if let Some(path) = &cli.program_keypair {
        return Ok(keyfile::load_pubkey(Path::new(path))?);
    }
    Err(anyhow!("provide --program-id or --program-keypair"))
}
