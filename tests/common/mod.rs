#![allow(dead_code)]

use serde_json::{Value, json};

use spades_ledger::artifact::{GameData, build_game_data};
use spades_ledger::config::AppConfig;
use spades_ledger::domain::{InputDocument, TournamentCollection};

/// Assembles an input document one tournament at a time, in sequence order
#[derive(Default)]
pub struct DocumentBuilder {
    tournaments: Vec<Value>,
    records: Vec<Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row of scores per round, columns in `players` order
    pub fn tournament(mut self, kind: &str, number: u32, players: &[&str], rows: &[Vec<i32>]) -> Self {
        let id = format!("{kind}_{number}");
        let sequence = self.tournaments.len() + 1;
        self.tournaments.push(json!({
            "type": kind,
            "number": number,
            "sequenceNumber": sequence,
        }));
        for (i, row) in rows.iter().enumerate() {
            for (player, score) in players.iter().zip(row) {
                self.records.push(json!({
                    "tournamentId": id,
                    "roundIndex": i + 1,
                    "player": player,
                    "score": score,
                }));
            }
        }
        self
    }

    pub fn json(&self) -> Value {
        json!({
            "tournaments": self.tournaments,
            "records": self.records,
            "metadata": {},
        })
    }

    pub fn document(&self) -> InputDocument {
        serde_json::from_value(self.json()).expect("builder emits a valid document")
    }
}

/// Rounds where two of four players win, rotating the winning pair
pub fn rotating_rounds(rounds: usize, players: usize, offset: usize) -> Vec<Vec<i32>> {
    (0..rounds)
        .map(|r| {
            let first = (r + offset) % players;
            let second = (r * 3 + offset + 1) % players;
            (0..players)
                .map(|p| {
                    if p == first {
                        30 + (r % 4) as i32 * 5
                    } else if p == second && second != first {
                        30
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect()
}

pub fn build(document: &InputDocument, config: &AppConfig) -> GameData {
    let collection = TournamentCollection::from_document(document, &config.rating)
        .expect("document passes validation");
    build_game_data(&collection, config)
}

/// Three tournaments of 75 rounds for A-D; guest G only plays the first two
pub fn league() -> InputDocument {
    let with_guest = ["A", "B", "C", "D", "G"];
    let regulars = ["A", "B", "C", "D"];
    DocumentBuilder::new()
        .tournament("championship", 1, &with_guest, &rotating_rounds(75, 5, 0))
        .tournament("mini_championship", 1, &with_guest, &rotating_rounds(75, 5, 2))
        .tournament("championship", 2, &regulars, &rotating_rounds(75, 4, 1))
        .document()
}
