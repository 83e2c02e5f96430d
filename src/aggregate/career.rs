use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::CorePlayers;
use crate::rating::{PlayerRatingState, RatingBook};

/// Career summary of a core player at the end of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    pub career_games: u32,
    pub career_wins: u32,
    pub win_pct: Option<u32>,
    pub bid_and_won: u32,
    pub bid_and_won_pct: Option<u32>,
    pub bid_attempts: u32,
    pub bid_wins: u32,
    pub bid_win_rate: Option<f64>,
    pub best_win_streak: u32,
    pub worst_loss_streak: u32,
    #[serde(rename = "numFivles")]
    pub num_fivples: u32,
    pub num_tenples: u32,
    #[serde(rename = "fiveMottes")]
    pub num_five_mottes: u32,
}

impl From<&PlayerRatingState> for CareerStats {
    fn from(state: &PlayerRatingState) -> Self {
        Self {
            career_games: state.career_games,
            career_wins: state.career_wins,
            win_pct: state.win_percentage(),
            bid_and_won: state.bid_and_won,
            bid_and_won_pct: state.bid_and_won_percentage(),
            bid_attempts: state.bid_attempts,
            bid_wins: state.bid_wins,
            bid_win_rate: state.bid_win_rate(),
            best_win_streak: state.best_win_streak,
            worst_loss_streak: state.worst_loss_streak,
            num_fivples: state.num_fivples,
            num_tenples: state.num_tenples,
            num_five_mottes: state.num_five_mottes,
        }
    }
}

pub fn career_stats(book: &RatingBook, core: &CorePlayers) -> BTreeMap<String, CareerStats> {
    core.iter()
        .filter_map(|player| book.get(player).map(|state| (player.clone(), CareerStats::from(state))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_core_players_are_reported() {
        let mut book = RatingBook::new(1000.0);
        let a = book.register("A");
        a.career_games = 4;
        a.career_wins = 3;
        a.bid_and_won = 1;
        book.register("Guest").career_games = 1;

        let mut collection = crate::domain::TournamentCollection::new();
        collection.add(crate::stats::test_support::tournament_from_rows(
            &["A", "B"],
            &[&[10, 0], &[10, 0]],
        ));
        let core = CorePlayers::identify(&collection, 0);

        let careers = career_stats(&book, &core);
        // B is core but never reached the book here
        assert_eq!(careers.len(), 1);
        assert_eq!(careers["A"].win_pct, Some(75));
        assert_eq!(careers["A"].bid_and_won_pct, Some(25));
        assert_eq!(careers["A"].bid_win_rate, None);

        let json = serde_json::to_value(&careers["A"]).unwrap();
        assert!(json.get("numFivles").is_some());
        assert!(json.get("fiveMottes").is_some());
    }
}
