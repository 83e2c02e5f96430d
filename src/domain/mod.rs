mod collection;
pub mod models;
mod progress;
mod roster;
pub mod tournament;

pub use collection::TournamentCollection;
pub use models::*;
pub use progress::RatingProgress;
pub use roster::CorePlayers;
pub use tournament::{Bidding, Round, Tournament};
