use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::InputError;

/// Closed set of tournament formats; each carries its own rating weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TournamentType {
    Championship,
    MiniChampionship,
    TinyChampionship,
    InternationalFriendly,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Championship => "championship",
            TournamentType::MiniChampionship => "mini_championship",
            TournamentType::TinyChampionship => "tiny_championship",
            TournamentType::InternationalFriendly => "international_friendly",
        }
    }

    /// "mini_championship" -> "Mini Championship"
    pub fn display(&self) -> String {
        self.as_str()
            .split('_')
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "mini_championship" -> "MC"
    pub fn code(&self) -> String {
        self.as_str()
            .split('_')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TournamentType {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for TournamentType {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "championship" => Ok(TournamentType::Championship),
            "mini_championship" => Ok(TournamentType::MiniChampionship),
            "tiny_championship" => Ok(TournamentType::TinyChampionship),
            "international_friendly" => Ok(TournamentType::InternationalFriendly),
            other => Err(InputError::UnknownTournamentType(other.to_string())),
        }
    }
}

impl From<TournamentType> for String {
    fn from(value: TournamentType) -> Self {
        value.as_str().to_string()
    }
}

/// One player's result in one round of one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub tournament_id: String,
    pub round_index: u32,
    pub player: String,
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bidder: Option<bool>,
}

impl RoundRecord {
    pub fn won(&self) -> bool {
        self.score > 0
    }
}

/// Tournament listing entry as delivered by the ingestion layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEntry {
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub number: u32,
    pub sequence_number: u32,
    #[serde(default)]
    pub display_number: Option<u32>,
}

impl TournamentEntry {
    pub fn id(&self) -> String {
        tournament_id(self.tournament_type, self.number)
    }
}

pub fn tournament_id(tournament_type: TournamentType, number: u32) -> String {
    format!("{}_{}", tournament_type.as_str(), number)
}

/// Display-only lookup data; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// The whole input handed over by the ingestion layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputDocument {
    pub tournaments: Vec<TournamentEntry>,
    pub records: Vec<RoundRecord>,
    #[serde(default)]
    pub metadata: BTreeMap<String, TournamentMetadata>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentContext {
    pub id: String,
    pub tournament_type: TournamentType,
    pub number: u32,
    pub sequence_number: u32,
    pub display_number: u32,
    pub weight: f64,
}

impl TournamentContext {
    pub fn display_name(&self) -> String {
        format!("{} #{}", self.tournament_type.display(), self.display_number)
    }
}
