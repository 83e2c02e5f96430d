use serde::{Deserialize, Serialize};

use super::round_to;
use crate::domain::Tournament;

/// Per-player totals for one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerTotals {
    pub player: String,
    pub wins: u32,
    pub total_games: u32,
    pub total_points: i64,
    pub avg_points: f64,
    pub win_percentage: u32,
}

/// Totals sorted by points, then wins, then name
pub fn player_totals(tournament: &Tournament) -> Vec<PlayerTotals> {
    let total_games = tournament.total_rounds();
    let mut totals: Vec<PlayerTotals> = tournament
        .players
        .iter()
        .map(|player| build_totals(tournament, player, total_games))
        .collect();

    totals.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.wins.cmp(&a.wins))
            .then(a.player.cmp(&b.player))
    });
    totals
}

fn build_totals(tournament: &Tournament, player: &str, total_games: u32) -> PlayerTotals {
    let wins = tournament.rounds.iter().filter(|r| r.won(player)).count() as u32;
    let total_points: i64 = tournament
        .rounds
        .iter()
        .map(|r| r.scores.get(player).copied().unwrap_or(0) as i64)
        .sum();

    PlayerTotals {
        player: player.to_string(),
        wins,
        total_games,
        total_points,
        avg_points: round_to(total_points as f64 / total_games as f64, 1),
        win_percentage: (wins as f64 / total_games as f64 * 100.0).round() as u32,
    }
}

/// Everyone tied at the top total; each gets full credit
pub fn winners(totals: &[PlayerTotals]) -> Vec<String> {
    let Some(top) = totals.iter().map(|t| t.total_points).max() else {
        return Vec::new();
    };
    totals
        .iter()
        .filter(|t| t.total_points == top)
        .map(|t| t.player.clone())
        .collect()
}
