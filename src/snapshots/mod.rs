//! Frozen per-tournament views of the rating book.
//!
//! Recording only reads the engine's before/after copies; the live book is never
//! touched here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{CorePlayers, Tournament};
use crate::rating::{PlayerName, PlayerRatingState, TournamentRun};
use crate::stats::round_to;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPlayerSnapshot {
    pub rating_before: f64,
    pub rating_after: f64,
    pub rating_change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_before: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_after: Option<u32>,
    /// Positive when the player moved up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_change: Option<i32>,
    pub career_games: u32,
    pub career_wins: u32,
    pub win_pct: Option<u32>,
    pub bid_and_won_pct: Option<u32>,
    pub bid_attempts: u32,
    pub bid_wins: u32,
    pub bid_win_rate: Option<f64>,
    pub current_win_streak: u32,
    pub current_loss_streak: u32,
    pub best_win_streak: u32,
    pub worst_loss_streak: u32,
    pub best_win_streak_this_tourney: u32,
    pub worst_loss_streak_this_tourney: u32,
    #[serde(rename = "numFivles")]
    pub num_fivples: u32,
    pub num_tenples: u32,
    #[serde(rename = "fiveMottes")]
    pub num_five_mottes: u32,
    pub fivples_this_tourney: u32,
    pub tenples_this_tourney: u32,
    pub five_mottes_this_tourney: u32,
    pub is_guest: bool,
    pub participated: bool,
}

/// 1-based ranks of the core players present in `book`, by rating desc then name
pub fn rank_core(
    book: &BTreeMap<PlayerName, PlayerRatingState>,
    core: &CorePlayers,
) -> BTreeMap<PlayerName, u32> {
    let mut ranked: Vec<(&PlayerName, f64)> = book
        .iter()
        .filter(|(player, _)| core.contains(player))
        .map(|(player, state)| (player, state.rating))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (player, _))| (player.clone(), i as u32 + 1))
        .collect()
}

/// Snapshots of every core player seen so far plus every guest of `tournament`
pub fn record_snapshots(
    tournament: &Tournament,
    run: &TournamentRun,
    core: &CorePlayers,
    base_rating: f64,
) -> BTreeMap<PlayerName, TournamentPlayerSnapshot> {
    let ranks_before = rank_core(&run.before, core);
    let ranks_after = rank_core(&run.after, core);

    let guests = tournament.players.iter().filter(|p| !core.contains(p));
    let covered = core.iter().chain(guests);

    covered
        .filter_map(|player| {
            let after = run.after.get(player)?;
            let before = run.before.get(player);
            let is_guest = !core.contains(player);
            let participated = tournament.players.contains(player);

            let (rank_before, rank_after, rank_change) = if is_guest {
                (None, None, None)
            } else {
                let rank_before = ranks_before.get(player).copied();
                let rank_after = ranks_after.get(player).copied();
                let change = match (rank_before, rank_after) {
                    (Some(b), Some(a)) => b as i32 - a as i32,
                    _ => 0,
                };
                (rank_before, rank_after, Some(change))
            };

            let snapshot = freeze(before, after, base_rating, participated, is_guest);
            Some((
                player.clone(),
                TournamentPlayerSnapshot {
                    rank_before,
                    rank_after,
                    rank_change,
                    ..snapshot
                },
            ))
        })
        .collect()
}

fn freeze(
    before: Option<&PlayerRatingState>,
    after: &PlayerRatingState,
    base_rating: f64,
    participated: bool,
    is_guest: bool,
) -> TournamentPlayerSnapshot {
    let rating_before = before.map(|s| s.rating).unwrap_or(base_rating);
    let milestones_before = before
        .map(|s| (s.num_fivples, s.num_tenples, s.num_five_mottes))
        .unwrap_or_default();

    // the this-tourney maxima of a player who sat out still hold an older tournament
    let (best_this, worst_this) = if participated {
        (after.best_win_streak_this_tourney, after.worst_loss_streak_this_tourney)
    } else {
        (0, 0)
    };

    TournamentPlayerSnapshot {
        rating_before: round_to(rating_before, 1),
        rating_after: round_to(after.rating, 1),
        rating_change: round_to(after.rating - rating_before, 1),
        rank_before: None,
        rank_after: None,
        rank_change: None,
        career_games: after.career_games,
        career_wins: after.career_wins,
        win_pct: after.win_percentage(),
        bid_and_won_pct: after.bid_and_won_percentage(),
        bid_attempts: after.bid_attempts,
        bid_wins: after.bid_wins,
        bid_win_rate: after.bid_win_rate(),
        current_win_streak: after.current_win_streak,
        current_loss_streak: after.current_loss_streak,
        best_win_streak: after.best_win_streak,
        worst_loss_streak: after.worst_loss_streak,
        best_win_streak_this_tourney: best_this,
        worst_loss_streak_this_tourney: worst_this,
        num_fivples: after.num_fivples,
        num_tenples: after.num_tenples,
        num_five_mottes: after.num_five_mottes,
        fivples_this_tourney: after.num_fivples - milestones_before.0,
        tenples_this_tourney: after.num_tenples - milestones_before.1,
        five_mottes_this_tourney: after.num_five_mottes - milestones_before.2,
        is_guest,
        participated,
    }
}
