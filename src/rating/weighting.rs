use ndarray::Array1;

use crate::config::RatingSettings;
use crate::domain::TournamentType;

/// Rating impact multiplier of a tournament format
pub fn calculate_weight(tournament_type: TournamentType, settings: &RatingSettings) -> f64 {
    match tournament_type {
        TournamentType::Championship => settings.championship_weight,
        TournamentType::MiniChampionship => settings.mini_championship_weight,
        TournamentType::TinyChampionship => settings.tiny_championship_weight,
        TournamentType::InternationalFriendly => settings.friendly_weight,
    }
}

pub fn apply_weight_to_deltas(deltas: &mut Array1<f64>, weight: f64) {
    deltas.mapv_inplace(|delta| delta * weight);
}
