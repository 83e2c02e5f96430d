use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::round_to;
use crate::domain::Tournament;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundPoint {
    pub cumulative_score: i64,
    pub win_ratio: f64,
    pub won: bool,
}

/// Running totals after one round, for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPoint {
    pub game: u32,
    pub players: BTreeMap<String, PlayerRoundPoint>,
}

/// Cumulative score and win ratio per player, in round order
pub fn cumulative_series(tournament: &Tournament) -> Vec<RoundPoint> {
    let mut running: BTreeMap<&str, (i64, u32)> = tournament
        .players
        .iter()
        .map(|p| (p.as_str(), (0, 0)))
        .collect();

    tournament
        .rounds
        .iter()
        .enumerate()
        .map(|(position, round)| {
            let played = position as u32 + 1;
            let players = running
                .iter_mut()
                .map(|(player, (score_sum, wins))| {
                    let score = round.scores.get(*player).copied().unwrap_or(0);
                    *score_sum += score as i64;
                    if score > 0 {
                        *wins += 1;
                    }
                    let point = PlayerRoundPoint {
                        cumulative_score: *score_sum,
                        win_ratio: round_to(*wins as f64 / played as f64, 4),
                        won: score > 0,
                    };
                    (player.to_string(), point)
                })
                .collect();
            RoundPoint {
                game: round.index,
                players,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::tournament_from_rows;

    #[test]
    fn test_running_totals() {
        let tournament = tournament_from_rows(&["A", "B"], &[&[30, 0], &[0, 20], &[15, 0]]);
        let series = cumulative_series(&tournament);

        assert_eq!(series.len(), 3);
        let last = &series[2];
        assert_eq!(last.game, 3);
        assert_eq!(last.players["A"].cumulative_score, 45);
        assert_eq!(last.players["A"].win_ratio, 0.6667);
        assert!(last.players["A"].won);
        assert_eq!(last.players["B"].cumulative_score, 20);
        assert_eq!(last.players["B"].win_ratio, 0.3333);
    }

    #[test]
    fn test_series_is_a_pure_function_of_rounds() {
        let tournament = tournament_from_rows(&["A", "B"], &[&[30, 0], &[0, 20]]);
        assert_eq!(cumulative_series(&tournament), cumulative_series(&tournament));
    }
}
