use anyhow::Result;
use hellodex_client::{ops, reader};
use serde::Serialize;

use crate::args::Cli;
use crate::cmd;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ReportOut {
    pub greeted: String,
    pub counter: u32,
}

pub fn run(cli: &Cli) -> Result<()> {
    let session = cmd::session(cli)?;
    let greeted = ops::greeted_address(&session)?;
    let record = reader::read_greeting(&session, &greeted)?;

    output::print(&ReportOut { greeted: greeted.to_string(), counter: record.counter })?;
    if !output::is_json() {
        println!("{} has been greeted {} time(s)", greeted, record.counter);
    }
    Ok(())
}
