//! Table configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Most seats a table can have.
pub const MAX_SEATS: usize = 10;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("big blind must be positive")]
    ZeroBigBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    BlindsInverted { small: u64, big: u64 },
    #[error("player bounds invalid: min {min}, max {max}")]
    PlayerBounds { min: usize, max: usize },
    #[error("{seats} stacks of {stack} chips overflow the chip count")]
    ChipOverflow { stack: u64, seats: usize },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Table-wide settings. Every field has a default, so a partial JSON document
/// is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Small blind in chips
    pub small_blind: u64,

    /// Big blind in chips
    pub big_blind: u64,

    /// Stack each seat receives when the player count is set
    pub default_stack: u64,

    pub min_players: usize,

    pub max_players: usize,

    /// Fixed shuffle seed; each hand shuffles with `seed + hands dealt`
    pub shuffle_seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            default_stack: 100,
            min_players: 2,
            max_players: MAX_SEATS,
            shuffle_seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    pub fn with_blinds(mut self, small_blind: u64, big_blind: u64) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind == 0 {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::BlindsInverted {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if self.min_players < 2 || self.max_players < self.min_players || self.max_players > MAX_SEATS {
            return Err(ConfigError::PlayerBounds { min: self.min_players, max: self.max_players });
        }
        if self.default_stack.checked_mul(self.max_players as u64).is_none() {
            return Err(ConfigError::ChipOverflow { stack: self.default_stack, seats: self.max_players });
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_home_game_blinds() {
        let c = TableConfig::default();
        assert_eq!((c.small_blind, c.big_blind), (1, 2));
        assert_eq!(c.default_stack, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = TableConfig::from_json_str(r#"{"big_blind": 10, "small_blind": 5}"#).unwrap();
        assert_eq!(c.big_blind, 10);
        assert_eq!(c.max_players, 10);
        assert_eq!(c.shuffle_seed, None);
    }

    #[test]
    fn invalid_blinds_are_rejected() {
        assert!(matches!(
            TableConfig::default().with_blinds(5, 2).validate(),
            Err(ConfigError::BlindsInverted { small: 5, big: 2 })
        ));
        assert!(matches!(
            TableConfig::default().with_blinds(0, 0).validate(),
            Err(ConfigError::ZeroBigBlind)
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{"min_players": 1}"#),
            Err(ConfigError::PlayerBounds { .. })
        ));
    }

    #[test]
    fn seat_limit_and_chip_total_are_checked() {
        assert!(matches!(
            TableConfig::from_json_str(r#"{"max_players": 11}"#),
            Err(ConfigError::PlayerBounds { min: 2, max: 11 })
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{"default_stack": 18446744073709551615}"#),
            Err(ConfigError::ChipOverflow { seats: 10, .. })
        ));
    }

    #[test]
    fn garbage_json_is_a_parse_error() {
        assert!(matches!(TableConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }
}
