use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::CorePlayers;
use crate::stats::{TournamentStats, round_to, teams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeStats {
    pub player: String,
    pub wins: u32,
    pub total_games: u32,
    pub total_points: i64,
    pub tournament_wins: u32,
    pub win_percentage: Option<f64>,
    pub avg_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseRecord {
    pub player1: String,
    pub player2: String,
    pub wins: u32,
    pub losses: u32,
    pub total_games: u32,
    pub win_pct: Option<f64>,
}

#[derive(Default)]
struct Accumulator {
    wins: u32,
    total_games: u32,
    total_points: i64,
    tournament_wins: u32,
}

/// Career sums per core player, recomputed from raw per-tournament totals.
/// Most tournament wins first, ties kept in core-player order.
pub fn all_time_stats(stats: &[TournamentStats], core: &CorePlayers) -> Vec<AllTimeStats> {
    let mut sums: BTreeMap<&str, Accumulator> =
        core.iter().map(|p| (p.as_str(), Accumulator::default())).collect();

    for tournament in stats {
        for totals in &tournament.totals {
            if let Some(sum) = sums.get_mut(totals.player.as_str()) {
                sum.wins += totals.wins;
                sum.total_games += totals.total_games;
                sum.total_points += totals.total_points;
            }
        }
        for winner in &tournament.winners {
            if let Some(sum) = sums.get_mut(winner.as_str()) {
                sum.tournament_wins += 1;
            }
        }
    }

    let mut result: Vec<AllTimeStats> = core
        .iter()
        .map(|player| {
            let sum = sums.remove(player.as_str()).unwrap_or_default();
            let played = sum.total_games;
            AllTimeStats {
                player: player.clone(),
                wins: sum.wins,
                total_games: played,
                total_points: sum.total_points,
                tournament_wins: sum.tournament_wins,
                win_percentage: (played > 0).then(|| round_to(100.0 * sum.wins as f64 / played as f64, 1)),
                avg_points: (played > 0).then(|| round_to(sum.total_points as f64 / played as f64, 1)),
            }
        })
        .collect();

    // stable sort keeps core order among equals
    result.sort_by(|a, b| b.tournament_wins.cmp(&a.tournament_wins));
    result
}

/// Core pairs summed over every tournament's (already thresholded) pairwise entries
pub fn all_time_pairwise(stats: &[TournamentStats], core: &CorePlayers) -> Vec<PairwiseRecord> {
    let mut pairs: BTreeMap<(String, String), (u32, u32, u32)> = BTreeMap::new();

    for tournament in stats {
        for pair in &tournament.pairwise {
            let [first, second] = pair.members.as_slice() else {
                continue;
            };
            if !core.contains(first) || !core.contains(second) {
                continue;
            }
            let key = if first <= second {
                (first.clone(), second.clone())
            } else {
                (second.clone(), first.clone())
            };
            let entry = pairs.entry(key).or_default();
            entry.0 += pair.wins;
            entry.1 += pair.losses;
            entry.2 += pair.total_games;
        }
    }

    pairs
        .into_iter()
        .map(|((player1, player2), (wins, losses, total_games))| PairwiseRecord {
            player1,
            player2,
            wins,
            losses,
            total_games,
            win_pct: teams::win_percentage(wins, losses),
        })
        .collect()
}
