pub mod elo;
pub mod engine;
pub mod streaks;
pub mod types;
pub mod weighting;

pub use engine::{RatingEngine, TournamentRun};
pub use types::{PlayerName, PlayerRatingState, RatingBook, RatingValue};
pub use weighting::calculate_weight;
