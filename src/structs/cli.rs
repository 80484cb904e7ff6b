use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "arcdesk")]
#[clap(about = "Sessions, leads and transactions for the Arcdatum backend", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
