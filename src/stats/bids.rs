use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::round_to;
use crate::domain::{Round, Tournament};

/// Conversion record of a named bidder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedBidStats {
    pub bid_attempts: u32,
    pub bid_wins: u32,
    pub bid_win_rate: Option<f64>,
}

/// Heuristic count used when rounds do not name a bidder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidAndWon {
    pub player: String,
    pub bid_and_won: u32,
}

/// Percentage of bids converted, `None` without attempts
pub fn bid_win_rate(bid_wins: u32, bid_attempts: u32) -> Option<f64> {
    if bid_attempts == 0 {
        return None;
    }
    Some(round_to(100.0 * bid_wins as f64 / bid_attempts as f64, 1))
}

/// Per-player named-bidder stats; `None` when the tournament did not record bidders
pub fn named_bid_stats(tournament: &Tournament) -> Option<BTreeMap<String, NamedBidStats>> {
    if !tournament.has_bidder_data() {
        return None;
    }

    let mut counts: BTreeMap<&str, (u32, u32)> =
        tournament.players.iter().map(|p| (p.as_str(), (0, 0))).collect();

    for (position, round) in tournament.rounds.iter().enumerate() {
        let Some(bidder) = tournament.bidder(position) else {
            continue;
        };
        if let Some((attempts, wins)) = counts.get_mut(bidder) {
            *attempts += 1;
            if round.won(bidder) {
                *wins += 1;
            }
        }
    }

    let stats = counts
        .into_iter()
        .map(|(player, (attempts, wins))| {
            let stats = NamedBidStats {
                bid_attempts: attempts,
                bid_wins: wins,
                bid_win_rate: bid_win_rate(wins, attempts),
            };
            (player.to_string(), stats)
        })
        .collect();
    Some(stats)
}

/// Credits the top scorer(s) of every round whose total is not a multiple of the top
/// score, i.e. where someone scored beyond the shared base
pub fn inferred_bid_and_won(tournament: &Tournament) -> Vec<BidAndWon> {
    let mut counts: BTreeMap<&str, u32> =
        tournament.players.iter().map(|p| (p.as_str(), 0)).collect();

    for round in &tournament.rounds {
        for player in top_scorers_with_bonus(round) {
            if let Some(count) = counts.get_mut(player) {
                *count += 1;
            }
        }
    }

    let mut result: Vec<BidAndWon> = counts
        .into_iter()
        .map(|(player, count)| BidAndWon {
            player: player.to_string(),
            bid_and_won: count,
        })
        .collect();
    result.sort_by(|a, b| b.bid_and_won.cmp(&a.bid_and_won).then(a.player.cmp(&b.player)));
    result
}

fn top_scorers_with_bonus(round: &Round) -> Vec<&str> {
    let Some(max) = round.scores.values().copied().max() else {
        return Vec::new();
    };
    let total: i64 = round.scores.values().map(|&s| s as i64).sum();
    if max <= 0 || total % max as i64 == 0 {
        return Vec::new();
    }

    round
        .scores
        .iter()
        .filter(|(_, score)| **score == max)
        .map(|(player, _)| player.as_str())
        .collect()
}
