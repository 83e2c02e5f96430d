use std::collections::BTreeMap;

use crate::stats::bids::bid_win_rate;

pub type PlayerName = String;
pub type RatingValue = f64;

/// Everything the chronological pass knows about one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRatingState {
    pub rating: RatingValue,
    pub career_games: u32,
    pub career_wins: u32,
    pub current_win_streak: u32,
    pub current_loss_streak: u32,
    pub best_win_streak: u32,
    pub worst_loss_streak: u32,
    pub best_win_streak_this_tourney: u32,
    pub worst_loss_streak_this_tourney: u32,
    pub num_fivples: u32,
    pub num_tenples: u32,
    pub num_five_mottes: u32,
    pub bid_attempts: u32,
    pub bid_wins: u32,
    pub bid_and_won: u32,
}

impl PlayerRatingState {
    pub fn new(rating: RatingValue) -> Self {
        Self {
            rating,
            career_games: 0,
            career_wins: 0,
            current_win_streak: 0,
            current_loss_streak: 0,
            best_win_streak: 0,
            worst_loss_streak: 0,
            best_win_streak_this_tourney: 0,
            worst_loss_streak_this_tourney: 0,
            num_fivples: 0,
            num_tenples: 0,
            num_five_mottes: 0,
            bid_attempts: 0,
            bid_wins: 0,
            bid_and_won: 0,
        }
    }

    /// Whole-percent career win rate, truncated
    pub fn win_percentage(&self) -> Option<u32> {
        truncated_percentage(self.career_wins, self.career_games)
    }

    pub fn bid_and_won_percentage(&self) -> Option<u32> {
        truncated_percentage(self.bid_and_won, self.career_games)
    }

    pub fn bid_win_rate(&self) -> Option<f64> {
        bid_win_rate(self.bid_wins, self.bid_attempts)
    }
}

fn truncated_percentage(part: u32, whole: u32) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some((100.0 * part as f64 / whole as f64) as u32)
}

/// Rating state of every player seen so far, iterated in name order
#[derive(Debug, Clone)]
pub struct RatingBook {
    players: BTreeMap<PlayerName, PlayerRatingState>,
    base_rating: RatingValue,
}

impl RatingBook {
    pub fn new(base_rating: RatingValue) -> Self {
        Self {
            players: BTreeMap::new(),
            base_rating,
        }
    }

    pub fn base_rating(&self) -> RatingValue {
        self.base_rating
    }

    /// State of `player`, created at the base rating on first appearance
    pub fn register(&mut self, player: &str) -> &mut PlayerRatingState {
        let base = self.base_rating;
        self.players
            .entry(player.to_string())
            .or_insert_with(|| PlayerRatingState::new(base))
    }

    pub fn get(&self, player: &str) -> Option<&PlayerRatingState> {
        self.players.get(player)
    }

    pub fn rating_of(&self, player: &str) -> RatingValue {
        self.players
            .get(player)
            .map(|state| state.rating)
            .unwrap_or(self.base_rating)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, &PlayerRatingState)> {
        self.players.iter()
    }

    /// Point-in-time copy of every player's state
    pub fn snapshot(&self) -> BTreeMap<PlayerName, PlayerRatingState> {
        self.players.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_start_at_base_rating() {
        let mut book = RatingBook::new(1000.0);
        assert_eq!(book.rating_of("Abhi"), 1000.0);
        assert!(book.get("Abhi").is_none());

        book.register("Abhi").rating += 12.5;
        assert_eq!(book.rating_of("Abhi"), 1012.5);
        assert_eq!(book.len(), 1);

        // registering again keeps the existing state
        book.register("Abhi");
        assert_eq!(book.rating_of("Abhi"), 1012.5);
    }

    #[test]
    fn test_percentages_guard_against_zero_games() {
        let mut state = PlayerRatingState::new(1000.0);
        assert_eq!(state.win_percentage(), None);
        assert_eq!(state.bid_win_rate(), None);

        state.career_games = 3;
        state.career_wins = 2;
        state.bid_and_won = 1;
        assert_eq!(state.win_percentage(), Some(66));
        assert_eq!(state.bid_and_won_percentage(), Some(33));
    }
}
