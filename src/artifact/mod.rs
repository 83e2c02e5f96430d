pub mod builder;
pub mod models;

pub use builder::build_game_data;
pub use models::{GameData, SnapshotTable, TournamentBundle, TournamentSummary};
