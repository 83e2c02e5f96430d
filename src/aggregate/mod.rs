//! Whole-history aggregates, computed once after the rating pass.

pub mod all_time;
pub mod career;
pub mod leaderboard;

pub use all_time::{AllTimeStats, PairwiseRecord, all_time_pairwise, all_time_stats};
pub use career::{CareerStats, career_stats};
pub use leaderboard::{RankingEntry, RatingHistoryRow, rankings, rating_history};
