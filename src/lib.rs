pub mod aggregate;
pub mod api;
pub mod artifact;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod services;
pub mod snapshots;
pub mod stats;
pub mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::processing::ProcessingService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, artifact: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, artifact.to_path_buf());
        service.run().await
    })
}

pub fn handle_process(input: &Path, output: &Path) -> Result<()> {
    let config = AppConfig::new();
    let service = ProcessingService::new(config, input.to_path_buf(), output.to_path_buf());
    service.run().map(|_| ())
}
