//! Per-tournament aggregation. Everything here is a pure function of one
//! tournament's rounds; nothing is carried between tournaments.

pub mod bids;
pub mod consistency;
pub mod series;
pub mod teams;
pub mod totals;

use std::collections::BTreeMap;

use crate::config::StatsSettings;
use crate::domain::Tournament;

pub use bids::{BidAndWon, NamedBidStats};
pub use consistency::ConsistencyStats;
pub use series::{PlayerRoundPoint, RoundPoint};
pub use teams::TeamStat;
pub use totals::PlayerTotals;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone)]
pub struct TournamentStats {
    pub totals: Vec<PlayerTotals>,
    pub winners: Vec<String>,
    pub series: Vec<RoundPoint>,
    pub pairwise: Vec<TeamStat>,
    pub trios: Vec<TeamStat>,
    pub bid_and_won: Vec<BidAndWon>,
    /// `None` when the tournament did not record bidders
    pub named_bids: Option<BTreeMap<String, NamedBidStats>>,
    pub consistency: BTreeMap<String, ConsistencyStats>,
}

pub fn aggregate_tournament(tournament: &Tournament, settings: &StatsSettings) -> TournamentStats {
    let totals = totals::player_totals(tournament);
    let winners = totals::winners(&totals);

    let consistency = tournament
        .players
        .iter()
        .map(|p| (p.clone(), consistency::consistency_stats(tournament, p)))
        .collect();

    TournamentStats {
        winners,
        totals,
        series: series::cumulative_series(tournament),
        pairwise: teams::pairwise_stats(tournament, settings.pairwise_min_games),
        trios: teams::trio_stats(tournament, settings.trio_min_games),
        bid_and_won: bids::inferred_bid_and_won(tournament),
        named_bids: bids::named_bid_stats(tournament),
        consistency,
    }
}
