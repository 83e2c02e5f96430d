use std::collections::BTreeMap;

use super::collection::TournamentCollection;

/// Players with more than `threshold` career rounds, ordered by rounds played (desc)
/// then name. Everyone else is a guest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorePlayers {
    players: Vec<String>,
}

impl CorePlayers {
    pub fn identify(collection: &TournamentCollection, threshold: u32) -> Self {
        let mut rounds: BTreeMap<&str, u32> = BTreeMap::new();
        for tournament in collection.iter() {
            for player in &tournament.players {
                *rounds.entry(player.as_str()).or_default() += tournament.total_rounds();
            }
        }

        let mut core: Vec<(&str, u32)> = rounds
            .into_iter()
            .filter(|(_, played)| *played > threshold)
            .collect();
        core.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        Self {
            players: core.into_iter().map(|(p, _)| p.to_string()).collect(),
        }
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Position in the core ordering, used to break ties in leaderboards
    pub fn position(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}
