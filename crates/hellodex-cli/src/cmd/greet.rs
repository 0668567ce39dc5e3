use anyhow::Result;
use hellodex_client::{funding, ops, reader};
use hellodex_core::config::GreetConfig;
use serde::Serialize;

use crate::args::Cli;
use crate::cmd;
use crate::output;

#[derive(Debug, Serialize)]
pub struct GreetOut {
    pub greeted: String,
    pub signature: String,
    pub counter: u32,
    pub payer_lamports: u64,
}

pub fn run(cli: &Cli) -> Result<()> {
    let session = cmd::session(cli)?;

    let payer_lamports = funding::ensure_funded(&session)?;
    ops::check_program(&session)?;

    let signature = ops::greet(&session, &GreetConfig::default())?;
    let greeted = ops::greeted_address(&session)?;
    let record = reader::read_greeting(&session, &greeted)?;

    output::print(&GreetOut {
        greeted: greeted.to_string(),
        signature: signature.to_string(),
        counter: record.counter,
        payer_lamports,
    })?;
    if !output::is_json() {
        println!("{} has been greeted {} time(s)", greeted, record.counter);
    }
    Ok(())
}
