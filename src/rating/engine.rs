use std::collections::BTreeMap;

use log::{debug, info};

use super::elo::round_deltas;
use super::streaks::{begin_tournament, record_result};
use super::types::{PlayerName, PlayerRatingState, RatingBook};
use super::weighting::apply_weight_to_deltas;
use crate::config::{AppConfig, RatingSettings, StreakSettings};
use crate::domain::{RatingProgress, Round, Tournament, TournamentCollection};

/// Book state on both sides of one tournament
#[derive(Debug, Clone)]
pub struct TournamentRun {
    pub tournament_id: String,
    /// Every player known before the tournament started, newcomers excluded
    pub before: BTreeMap<PlayerName, PlayerRatingState>,
    pub after: BTreeMap<PlayerName, PlayerRatingState>,
}

/// Chronological rating pass. Owns the only mutable player state of a run.
pub struct RatingEngine {
    rating: RatingSettings,
    streaks: StreakSettings,
    book: RatingBook,
}

impl RatingEngine {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rating: config.rating.clone(),
            streaks: config.streaks.clone(),
            book: RatingBook::new(config.rating.base_rating),
        }
    }

    pub fn book(&self) -> &RatingBook {
        &self.book
    }

    pub fn into_book(self) -> RatingBook {
        self.book
    }

    /// Rates every tournament of `collection` in order
    pub fn process_all(&mut self, collection: &TournamentCollection) -> Vec<TournamentRun> {
        info!("Rating {} tournaments", collection.len());
        let mut progress = RatingProgress::new(collection.len());

        collection
            .iter()
            .map(|tournament| {
                let run = self.process_tournament(tournament);
                progress.record_tournament(tournament.rounds.len());
                run
            })
            .collect()
    }

    pub fn process_tournament(&mut self, tournament: &Tournament) -> TournamentRun {
        let before = self.book.snapshot();

        for player in &tournament.players {
            begin_tournament(self.book.register(player));
        }

        for (position, round) in tournament.rounds.iter().enumerate() {
            self.process_round(round, tournament.context.weight, tournament.bidder(position));
        }

        TournamentRun {
            tournament_id: tournament.id().to_string(),
            before,
            after: self.book.snapshot(),
        }
    }

    fn process_round(&mut self, round: &Round, weight: f64, bidder: Option<&str>) {
        let mut deltas = round_deltas(round, &self.book, &self.rating);
        apply_weight_to_deltas(&mut deltas, weight);

        let lowest_winning_score = round.scores.values().copied().filter(|&s| s > 0).min();

        for ((player, &score), delta) in round.scores.iter().zip(deltas.iter()) {
            let won = score > 0;
            let state = self.book.register(player);
            state.rating += delta;
            record_result(state, won, &self.streaks);

            if lowest_winning_score.is_some_and(|lowest| score > lowest) {
                state.bid_and_won += 1;
            }
            if bidder == Some(player.as_str()) {
                state.bid_attempts += 1;
                if won {
                    state.bid_wins += 1;
                }
            }

            debug!(
                "round {}: {} {} {:+.2} -> {:.2}",
                round.index,
                player,
                if won { "W" } else { "L" },
                delta,
                state.rating
            );
        }
    }
}
