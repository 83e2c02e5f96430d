use anyhow::Context as _;
use thiserror::Error;

/// Malformed input. Every variant aborts the whole run: rating state is cumulative,
/// so a skipped tournament would corrupt every later rating.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown tournament type: {0}")]
    UnknownTournamentType(String),

    #[error("Tournament {0} is listed more than once")]
    DuplicateTournament(String),

    #[error("Tournament {current} (sequence {current_seq}) does not follow {previous} (sequence {previous_seq})")]
    OutOfOrder {
        previous: String,
        previous_seq: u32,
        current: String,
        current_seq: u32,
    },

    #[error("Record references unknown tournament {0}")]
    UnknownTournament(String),

    #[error("Tournament {0} has no rounds")]
    EmptyTournament(String),

    #[error("Tournament {tournament} has {players} player(s); at least two are required")]
    TooFewPlayers { tournament: String, players: usize },

    #[error("Tournament {tournament}: expected round {expected}, found round {found}")]
    NonContiguousRounds {
        tournament: String,
        expected: u32,
        found: u32,
    },

    #[error("Tournament {tournament}, round {round}: no record for {player}")]
    MissingRecord {
        tournament: String,
        round: u32,
        player: String,
    },

    #[error("Tournament {tournament}, round {round}: {player} has more than one record")]
    DuplicateRecord {
        tournament: String,
        round: u32,
        player: String,
    },

    #[error("Tournament {tournament}, round {round}: more than one bidder")]
    MultipleBidders { tournament: String, round: u32 },
}

/// Add context to artifact/input IO errors
pub fn io_context(operation: &str, path: &str) -> String {
    format!("Failed to {} {}", operation, path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_tournament() {
        let err = InputError::MissingRecord {
            tournament: "championship_3".to_string(),
            round: 7,
            player: "Nats".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Tournament championship_3, round 7: no record for Nats"
        );
    }

    #[test]
    fn test_parse_context_wraps_source() {
        let result: Result<u32, std::num::ParseIntError> = "x".parse::<u32>();
        let err = with_parse_context(result, "round index").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse round index");
    }
}
