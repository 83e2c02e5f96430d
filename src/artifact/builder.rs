use log::{info, warn};

use super::models::{GameData, SnapshotTable, TournamentBundle, TournamentSummary};
use crate::aggregate;
use crate::config::AppConfig;
use crate::domain::{CorePlayers, Tournament, TournamentCollection};
use crate::rating::RatingEngine;
use crate::snapshots::record_snapshots;
use crate::stats::{TournamentStats, aggregate_tournament};

/// Runs the whole batch over an already validated collection.
///
/// Pure: the same collection and config always produce the same document.
pub fn build_game_data(collection: &TournamentCollection, config: &AppConfig) -> GameData {
    let core = CorePlayers::identify(collection, config.stats.core_player_threshold);
    info!(
        "  → {} core players (more than {} rounds)",
        core.len(),
        config.stats.core_player_threshold
    );

    let stats: Vec<TournamentStats> = collection
        .iter()
        .map(|tournament| {
            let stats = aggregate_tournament(tournament, &config.stats);
            log_tournament(tournament, &stats);
            stats
        })
        .collect();

    let mut engine = RatingEngine::new(config);
    let runs = engine.process_all(collection);

    let tournament_snapshots: SnapshotTable = collection
        .iter()
        .zip(&runs)
        .map(|(tournament, run)| {
            let snapshots = record_snapshots(tournament, run, &core, config.rating.base_rating);
            (tournament.id().to_string(), snapshots)
        })
        .collect();

    let book = engine.into_book();
    let tournaments: Vec<TournamentBundle> = collection
        .iter()
        .zip(stats.iter())
        .map(|(tournament, stats)| bundle(tournament, stats, &core))
        .collect();

    info!("Computing all-time aggregates");
    GameData {
        tournament_summary: tournaments.iter().map(|t| t.summary.clone()).collect(),
        tournament_snapshots,
        rankings: aggregate::rankings(&book, &core),
        rating_history: aggregate::rating_history(&runs, &core, config.rating.base_rating),
        all_time_stats: aggregate::all_time_stats(&stats, &core),
        all_time_pairwise: aggregate::all_time_pairwise(&stats, &core),
        career_stats: aggregate::career_stats(&book, &core),
        players: core.as_slice().to_vec(),
        total_tournaments: tournaments.len(),
        tournaments,
    }
}

fn log_tournament(tournament: &Tournament, stats: &TournamentStats) {
    if !tournament.has_bidder_data() {
        warn!("{} has no bidder column, bid rates unavailable", tournament.id());
    }
    info!(
        "Processed {}: {} players, {} games, winner: {}",
        tournament.id(),
        tournament.players.len(),
        tournament.total_rounds(),
        stats.winners.join(" & ")
    );
}

fn bundle(tournament: &Tournament, stats: &TournamentStats, core: &CorePlayers) -> TournamentBundle {
    let context = &tournament.context;
    let metadata = &tournament.metadata;
    let (core_players, guest_players): (Vec<String>, Vec<String>) =
        tournament.players.iter().cloned().partition(|p| core.contains(p));

    let summary = TournamentSummary {
        id: context.id.clone(),
        tournament_type: context.tournament_type,
        number: context.number,
        display_number: context.display_number,
        display_name: context.display_name(),
        sequence_number: context.sequence_number,
        weight: context.weight,
        players: tournament.players.clone(),
        core_players,
        guest_players,
        total_games: tournament.total_rounds(),
        winner: stats.totals.first().map(|t| t.player.clone()),
        winners: stats.winners.clone(),
        name: metadata.name.clone(),
        location: metadata.location.clone(),
        flag: metadata.flag.clone(),
        dates: metadata.dates.clone(),
        year: metadata.year,
        player_stats: stats.totals.clone(),
        bid_stats_by_player: stats.named_bids.clone(),
        has_bidder_data: tournament.has_bidder_data(),
        consistency_stats: stats.consistency.clone(),
    };

    TournamentBundle {
        summary,
        game_data: stats.series.clone(),
        pairwise_stats: stats.pairwise.clone(),
        trio_stats: stats.trios.clone(),
        bid_and_won: stats.bid_and_won.clone(),
    }
}
