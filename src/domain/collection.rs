use log::warn;
use std::collections::{HashMap, HashSet};

use super::models::{InputDocument, RoundRecord, TournamentContext, TournamentEntry};
use super::tournament::Tournament;
use crate::config::RatingSettings;
use crate::errors::InputError;
use crate::rating::weighting::calculate_weight;

/// Validated tournaments in chronological (strictly increasing sequence) order
#[derive(Debug, Clone, Default)]
pub struct TournamentCollection {
    tournaments: Vec<Tournament>,
}

impl TournamentCollection {
    pub fn new() -> Self {
        Self {
            tournaments: Vec::new(),
        }
    }

    pub fn from_document(
        document: &InputDocument,
        settings: &RatingSettings,
    ) -> Result<Self, InputError> {
        validate_listing(&document.tournaments)?;
        let mut records = group_records(&document.tournaments, &document.records)?;
        let mut collection = Self::new();

        for entry in &document.tournaments {
            let id = entry.id();
            let metadata = document.metadata.get(&id).cloned().unwrap_or_else(|| {
                warn!("No metadata for {}, display fields will be empty", id);
                Default::default()
            });
            let tournament_records = records.remove(&id).unwrap_or_default();
            let context = build_context(entry, settings);
            collection.add(Tournament::from_records(context, metadata, &tournament_records)?);
        }

        Ok(collection)
    }

    /// Appends a tournament that must come after every tournament already held
    pub fn add(&mut self, tournament: Tournament) {
        self.tournaments.push(tournament);
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.iter()
    }

    pub fn as_slice(&self) -> &[Tournament] {
        &self.tournaments
    }
}

fn validate_listing(entries: &[TournamentEntry]) -> Result<(), InputError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(InputError::DuplicateTournament(entry.id()));
        }
    }

    for pair in entries.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.sequence_number <= previous.sequence_number {
            return Err(InputError::OutOfOrder {
                previous: previous.id(),
                previous_seq: previous.sequence_number,
                current: current.id(),
                current_seq: current.sequence_number,
            });
        }
    }

    Ok(())
}

fn group_records(
    entries: &[TournamentEntry],
    records: &[RoundRecord],
) -> Result<HashMap<String, Vec<RoundRecord>>, InputError> {
    let mut grouped: HashMap<String, Vec<RoundRecord>> =
        entries.iter().map(|e| (e.id(), Vec::new())).collect();

    for record in records {
        match grouped.get_mut(&record.tournament_id) {
            Some(bucket) => bucket.push(record.clone()),
            None => return Err(InputError::UnknownTournament(record.tournament_id.clone())),
        }
    }

    Ok(grouped)
}

fn build_context(entry: &TournamentEntry, settings: &RatingSettings) -> TournamentContext {
    TournamentContext {
        id: entry.id(),
        tournament_type: entry.tournament_type,
        number: entry.number,
        sequence_number: entry.sequence_number,
        display_number: entry.display_number.unwrap_or(entry.number),
        weight: calculate_weight(entry.tournament_type, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TournamentType;

    fn entry(tournament_type: TournamentType, number: u32, seq: u32) -> TournamentEntry {
        TournamentEntry {
            tournament_type,
            number,
            sequence_number: seq,
            display_number: None,
        }
    }

    fn records_for(id: &str) -> Vec<RoundRecord> {
        ["A", "B"]
            .iter()
            .enumerate()
            .map(|(i, p)| RoundRecord {
                tournament_id: id.to_string(),
                round_index: 1,
                player: p.to_string(),
                score: if i == 0 { 10 } else { 0 },
                is_bidder: None,
            })
            .collect()
    }

    #[test]
    fn test_builds_contexts_with_weights() {
        let mut records = records_for("championship_1");
        records.extend(records_for("mini_championship_1"));
        let document = InputDocument {
            tournaments: vec![
                entry(TournamentType::Championship, 1, 1),
                entry(TournamentType::MiniChampionship, 1, 2),
            ],
            records,
            metadata: Default::default(),
        };

        let collection =
            TournamentCollection::from_document(&document, &RatingSettings::default()).unwrap();

        assert_eq!(collection.len(), 2);
        let mini = collection.get("mini_championship_1").unwrap();
        assert_eq!(mini.context.weight, 0.75);
        assert_eq!(mini.context.display_number, 1);
        assert_eq!(mini.metadata.name, None);
    }

    #[test]
    fn test_out_of_order_sequence_fails() {
        let mut records = records_for("championship_1");
        records.extend(records_for("championship_2"));
        let document = InputDocument {
            tournaments: vec![
                entry(TournamentType::Championship, 2, 5),
                entry(TournamentType::Championship, 1, 5),
            ],
            records,
            metadata: Default::default(),
        };

        let err = TournamentCollection::from_document(&document, &RatingSettings::default())
            .unwrap_err();
        assert!(matches!(err, InputError::OutOfOrder { previous_seq: 5, current_seq: 5, .. }));
    }

    #[test]
    fn test_record_for_unlisted_tournament_fails() {
        let document = InputDocument {
            tournaments: vec![entry(TournamentType::Championship, 1, 1)],
            records: records_for("championship_9"),
            metadata: Default::default(),
        };

        let err = TournamentCollection::from_document(&document, &RatingSettings::default())
            .unwrap_err();
        assert_eq!(err, InputError::UnknownTournament("championship_9".to_string()));
    }

    #[test]
    fn test_listed_tournament_without_records_fails() {
        let document = InputDocument {
            tournaments: vec![entry(TournamentType::Championship, 1, 1)],
            records: Vec::new(),
            metadata: Default::default(),
        };

        let err = TournamentCollection::from_document(&document, &RatingSettings::default())
            .unwrap_err();
        assert_eq!(err, InputError::EmptyTournament("championship_1".to_string()));
    }

    #[test]
    fn test_duplicate_listing_fails() {
        let document = InputDocument {
            tournaments: vec![
                entry(TournamentType::Championship, 1, 1),
                entry(TournamentType::Championship, 1, 2),
            ],
            records: records_for("championship_1"),
            metadata: Default::default(),
        };

        let err = TournamentCollection::from_document(&document, &RatingSettings::default())
            .unwrap_err();
        assert_eq!(err, InputError::DuplicateTournament("championship_1".to_string()));
    }
}
