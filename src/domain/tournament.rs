use std::collections::{BTreeMap, BTreeSet};

use super::models::{RoundRecord, TournamentContext, TournamentMetadata};
use crate::errors::InputError;

/// One round: every participant's score, keyed (and therefore iterated) by name
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub index: u32,
    pub scores: BTreeMap<String, i32>,
}

impl Round {
    pub fn won(&self, player: &str) -> bool {
        self.scores.get(player).is_some_and(|&score| score > 0)
    }

    pub fn winners(&self) -> impl Iterator<Item = &str> {
        self.scores
            .iter()
            .filter(|(_, score)| **score > 0)
            .map(|(player, _)| player.as_str())
    }

    pub fn losers(&self) -> impl Iterator<Item = &str> {
        self.scores
            .iter()
            .filter(|(_, score)| **score <= 0)
            .map(|(player, _)| player.as_str())
    }
}

/// Whether a tournament recorded who bid in each round
#[derive(Debug, Clone, PartialEq)]
pub enum Bidding {
    Unrecorded,
    /// One entry per round, in round order
    Recorded(Vec<Option<String>>),
}

/// A validated tournament: contiguous rounds, one score per player per round
#[derive(Debug, Clone)]
pub struct Tournament {
    pub context: TournamentContext,
    pub metadata: TournamentMetadata,
    pub players: Vec<String>,
    pub rounds: Vec<Round>,
    pub bidding: Bidding,
}

impl Tournament {
    pub fn from_records(
        context: TournamentContext,
        metadata: TournamentMetadata,
        records: &[RoundRecord],
    ) -> Result<Self, InputError> {
        let id = context.id.clone();
        if records.is_empty() {
            return Err(InputError::EmptyTournament(id));
        }

        let players: Vec<String> = records
            .iter()
            .map(|r| r.player.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if players.len() < 2 {
            return Err(InputError::TooFewPlayers {
                tournament: id,
                players: players.len(),
            });
        }

        let by_round = group_by_round(records);
        let mut rounds = Vec::with_capacity(by_round.len());
        let mut bidders = Vec::with_capacity(by_round.len());

        for (position, (&index, round_records)) in by_round.iter().enumerate() {
            let expected = position as u32 + 1;
            if index != expected {
                return Err(InputError::NonContiguousRounds {
                    tournament: id,
                    expected,
                    found: index,
                });
            }
            rounds.push(build_round(&id, index, round_records, &players)?);
            bidders.push(find_bidder(&id, index, round_records)?);
        }

        let bidding = if records.iter().any(|r| r.is_bidder.is_some()) {
            Bidding::Recorded(bidders)
        } else {
            Bidding::Unrecorded
        };

        Ok(Self {
            context,
            metadata,
            players,
            rounds,
            bidding,
        })
    }

    pub fn id(&self) -> &str {
        &self.context.id
    }

    pub fn total_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn has_bidder_data(&self) -> bool {
        matches!(self.bidding, Bidding::Recorded(_))
    }

    /// Named bidder of the round at `position` (0-based), if recorded
    pub fn bidder(&self, position: usize) -> Option<&str> {
        match &self.bidding {
            Bidding::Recorded(bidders) => bidders.get(position).and_then(|b| b.as_deref()),
            Bidding::Unrecorded => None,
        }
    }
}

fn group_by_round(records: &[RoundRecord]) -> BTreeMap<u32, Vec<&RoundRecord>> {
    let mut by_round: BTreeMap<u32, Vec<&RoundRecord>> = BTreeMap::new();
    for record in records {
        by_round.entry(record.round_index).or_default().push(record);
    }
    by_round
}

fn build_round(
    tournament: &str,
    index: u32,
    records: &[&RoundRecord],
    players: &[String],
) -> Result<Round, InputError> {
    let mut scores = BTreeMap::new();
    for record in records {
        if scores.insert(record.player.clone(), record.score).is_some() {
            return Err(InputError::DuplicateRecord {
                tournament: tournament.to_string(),
                round: index,
                player: record.player.clone(),
            });
        }
    }

    if let Some(missing) = players.iter().find(|p| !scores.contains_key(*p)) {
        return Err(InputError::MissingRecord {
            tournament: tournament.to_string(),
            round: index,
            player: missing.clone(),
        });
    }

    Ok(Round { index, scores })
}

fn find_bidder(
    tournament: &str,
    index: u32,
    records: &[&RoundRecord],
) -> Result<Option<String>, InputError> {
    let mut named = records.iter().filter(|r| r.is_bidder == Some(true));
    let bidder = named.next().map(|r| r.player.clone());
    if named.next().is_some() {
        return Err(InputError::MultipleBidders {
            tournament: tournament.to_string(),
            round: index,
        });
    }
    Ok(bidder)
}
