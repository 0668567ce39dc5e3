use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "hellodex", version, about = "Demo client for the greeting counter and swap programs")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC endpoint.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8899")]
    pub url: String,

    /// Payer keypair file (default: ~/.config/solana/id.json).
    #[arg(long, global = true)]
    pub payer: Option<String>,

    /// Program id, base58. Takes precedence over --program-keypair.
    #[arg(long, global = true)]
    pub program_id: Option<String>,

    /// Keypair file of the deployed program.
    #[arg(long, global = true)]
    pub program_keypair: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Say hello: create the greeting account if needed, send one greeting,
    /// report the counter.
    Greet,

    /// Report how many times the greeting account has been greeted.
    Report,

    /// Submit one swap against the configured market.
    Swap {
        /// bid or ask. Picks the wallet that funds the order.
        #[arg(long)]
        side: String,

        /// Amount in the market's base units (no decimal scaling applied).
        #[arg(long)]
        amount: u64,

        /// Swap config JSON file; defaults to the built-in market instance.
        #[arg(long)]
        config: Option<String>,

        /// Authority keypair file; signs alongside the payer.
        #[arg(long)]
        authority: String,

        /// Build and print the instruction without submitting it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Payer balance.
    Balance,

    /// Run environment checks against the cluster.
    Doctor,
}
