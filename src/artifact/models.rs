use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregate::{AllTimeStats, CareerStats, PairwiseRecord, RankingEntry, RatingHistoryRow};
use crate::domain::TournamentType;
use crate::snapshots::TournamentPlayerSnapshot;
use crate::stats::{BidAndWon, ConsistencyStats, NamedBidStats, PlayerTotals, RoundPoint, TeamStat};

pub type SnapshotTable = BTreeMap<String, BTreeMap<String, TournamentPlayerSnapshot>>;

/// Listing view of one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub number: u32,
    pub display_number: u32,
    pub display_name: String,
    pub sequence_number: u32,
    pub weight: f64,
    pub players: Vec<String>,
    pub core_players: Vec<String>,
    pub guest_players: Vec<String>,
    pub total_games: u32,
    pub winner: Option<String>,
    pub winners: Vec<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub flag: Option<String>,
    pub dates: Option<String>,
    pub year: Option<i32>,
    pub player_stats: Vec<PlayerTotals>,
    /// Null when the tournament did not name bidders
    pub bid_stats_by_player: Option<BTreeMap<String, NamedBidStats>>,
    pub has_bidder_data: bool,
    pub consistency_stats: BTreeMap<String, ConsistencyStats>,
}

/// Full per-tournament bundle: the summary plus per-round and team data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentBundle {
    #[serde(flatten)]
    pub summary: TournamentSummary,
    pub game_data: Vec<RoundPoint>,
    pub pairwise_stats: Vec<TeamStat>,
    pub trio_stats: Vec<TeamStat>,
    pub bid_and_won: Vec<BidAndWon>,
}

/// The complete derived document handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub tournaments: Vec<TournamentBundle>,
    pub tournament_summary: Vec<TournamentSummary>,
    pub tournament_snapshots: SnapshotTable,
    pub rankings: Vec<RankingEntry>,
    pub rating_history: Vec<RatingHistoryRow>,
    pub all_time_stats: Vec<AllTimeStats>,
    pub all_time_pairwise: Vec<PairwiseRecord>,
    pub career_stats: BTreeMap<String, CareerStats>,
    pub players: Vec<String>,
    pub total_tournaments: usize,
}

impl GameData {
    pub fn tournament(&self, id: &str) -> Option<&TournamentBundle> {
        self.tournaments.iter().find(|t| t.summary.id == id)
    }

    pub fn snapshots(&self, id: &str) -> Option<&BTreeMap<String, TournamentPlayerSnapshot>> {
        self.tournament_snapshots.get(id)
    }

    pub fn career(&self, player: &str) -> Option<&CareerStats> {
        self.career_stats.get(player)
    }
}
