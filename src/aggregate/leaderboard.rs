use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::CorePlayers;
use crate::rating::{RatingBook, TournamentRun};
use crate::stats::round_to;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player: String,
    pub rating: f64,
    pub rank: u32,
}

/// Core player ratings after one tournament boundary; row 0 is the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistoryRow {
    pub tournament: u32,
    #[serde(flatten)]
    pub ratings: BTreeMap<String, f64>,
}

/// Final standings of the core players, best rating first
pub fn rankings(book: &RatingBook, core: &CorePlayers) -> Vec<RankingEntry> {
    let mut rated: Vec<(&String, f64)> = core.iter().map(|p| (p, book.rating_of(p))).collect();
    rated.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));

    rated
        .into_iter()
        .enumerate()
        .map(|(i, (player, rating))| RankingEntry {
            player: player.clone(),
            rating: round_to(rating, 1),
            rank: i as u32 + 1,
        })
        .collect()
}

pub fn rating_history(runs: &[TournamentRun], core: &CorePlayers, base_rating: f64) -> Vec<RatingHistoryRow> {
    let baseline = RatingHistoryRow {
        tournament: 0,
        ratings: core.iter().map(|p| (p.clone(), base_rating)).collect(),
    };

    let rows = runs.iter().enumerate().map(|(i, run)| RatingHistoryRow {
        tournament: i as u32 + 1,
        ratings: core
            .iter()
            .map(|p| {
                let rating = run.after.get(p).map(|s| s.rating).unwrap_or(base_rating);
                (p.clone(), round_to(rating, 1))
            })
            .collect(),
    });

    std::iter::once(baseline).chain(rows).collect()
}
