use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::path::PathBuf;

use crate::artifact::{GameData, build_game_data};
use crate::config::AppConfig;
use crate::domain::{InputDocument, TournamentCollection};
use crate::snapshots::TournamentPlayerSnapshot;
use crate::storage;

/// Batch pass: input document in, game data artifact out
pub struct ProcessingService {
    config: AppConfig,
    input: PathBuf,
    output: PathBuf,
}

impl ProcessingService {
    pub fn new(config: AppConfig, input: PathBuf, output: PathBuf) -> Self {
        Self { config, input, output }
    }

    pub fn run(&self) -> Result<GameData> {
        info!("=== Starting Data Processing ===\n");

        let document: InputDocument = storage::load_json(&self.input, "input document")?;
        info!(
            "  → Loaded {} tournaments, {} round records\n",
            document.tournaments.len(),
            document.records.len()
        );

        let collection = TournamentCollection::from_document(&document, &self.config.rating)
            .context("Input document rejected")?;

        let data = build_game_data(&collection, &self.config);

        storage::save_json_atomic(&self.output, &data)?;
        info!("  → Wrote {} tournaments to {}\n", data.total_tournaments, self.output.display());

        info!("=== Processing Complete ===");
        print_summary(&data);
        Ok(data)
    }
}

fn print_summary(data: &GameData) {
    println!("\n{}", "Final Rankings:".bold());
    let last = data
        .tournament_summary
        .last()
        .and_then(|t| data.snapshots(&t.id));

    for entry in &data.rankings {
        let movement = last
            .and_then(|snapshots| snapshots.get(&entry.player))
            .map(rank_movement)
            .unwrap_or_default();
        println!("  #{} {}: {} {}", entry.rank, entry.player, entry.rating, movement);
    }

    println!("\n{}", "All-time stats:".bold());
    for stats in &data.all_time_stats {
        let win_rate = stats
            .win_percentage
            .map(|pct| format!("{pct}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}: {} tourney wins, {} win rate",
            stats.player, stats.tournament_wins, win_rate
        );
    }
}

fn rank_movement(snapshot: &TournamentPlayerSnapshot) -> String {
    match snapshot.rank_change {
        Some(change) if change > 0 => format!("▲{change}").green().to_string(),
        Some(change) if change < 0 => format!("▼{}", -change).red().to_string(),
        _ => "-".dimmed().to_string(),
    }
}
