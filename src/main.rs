use anyhow::Result;

use spades_ledger::cli::Command;
use spades_ledger::{handle_process, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Process { input, output } => handle_process(input, output),
        Command::Serve { port, artifact } => handle_serve(*port, artifact),
    }
}
