use anyhow::Result;
use hellodex_client::{keyfile, ops, reader, Session};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::args::Cli;
use crate::cmd;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let mut checks = Vec::new();

    // Payer keypair file.
    let payer = cmd::payer_path(cli).and_then(|path| Ok(keyfile::load_keypair(&path)?));
    checks.push(match &payer {
        Ok(kp) => check("payer", true, kp.pubkey().to_string()),
        Err(e) => check("payer", false, e.to_string()),
    });

    // A session works for cluster checks even with a throwaway payer.
    let payer = payer.unwrap_or_else(|_| Keypair::new());
    let program_id = cmd::program_id(cli);
    let session = Session::connect(
        &cli.url,
        payer,
        program_id.as_ref().ok().copied().unwrap_or(Pubkey::default()),
    );

    checks.push(match session.cluster_version() {
        Ok(version) => check("rpc", true, format!("{} ({version})", cli.url)),
        Err(e) => check("rpc", false, e.to_string()),
    });

    checks.push(match reader::balance(&session, &session.payer_pubkey()) {
        Ok(lamports) => check("balance", true, format!("{lamports} lamports")),
        Err(e) => check("balance", false, e.to_string()),
    });

    checks.push(match program_id {
        Ok(id) => match ops::check_program(&session) {
            Ok(()) => check("program", true, id.to_string()),
            Err(e) => check("program", false, e.to_string()),
        },
        Err(e) => check("program", false, e.to_string()),
    });

    for c in &checks {
        output::status_line(&c.name, c.ok, &c.detail)?;
    }
    let ok = checks.iter().all(|c| c.ok);
    if output::is_json() {
        output::print(&DoctorOut { ok, checks })?;
    }
    Ok(())
}

fn check(name: &str, ok: bool, detail: String) -> Check {
    Check { name: name.to_string(), ok, detail }
}
