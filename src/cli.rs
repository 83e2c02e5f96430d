use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "spades-ledger rating and statistics engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate every tournament of an input document and write the game data artifact
    Process {
        /// Input document (tournaments, round records, metadata)
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the artifact
        #[arg(short, long, default_value = "game_data.json")]
        output: PathBuf,
    },
    /// Serve an already computed artifact over HTTP
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Artifact written by `process`
        #[arg(short, long, default_value = "game_data.json")]
        artifact: PathBuf,
    },
}
