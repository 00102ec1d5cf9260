//! Turn configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::START_DICE;
use super::entities::Points;

/// Errors from invalid turn configuration.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum SettingsError {
    #[error("a turn must start with 1 to 6 dice, not {0}")]
    InvalidDice(usize),
}

/// Where a turn starts: how many dice are up for rolling and how many
/// points are already on the table.
///
/// A fresh turn starts with six dice and nothing banked. A continuation
/// picks up the dice and score a previous player left behind.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TurnStart {
    pub dice: usize,
    pub score: Points,
}

impl Default for TurnStart {
    fn default() -> Self {
        Self::fresh()
    }
}

impl TurnStart {
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            dice: START_DICE,
            score: 0,
        }
    }

    /// Validated continuation start.
    ///
    /// # Errors
    ///
    /// Fails if `dice` isn't in `1..=6`.
    pub fn continuation(dice: usize, score: Points) -> Result<Self, SettingsError> {
        let start = Self { dice, score };
        start.validate()?;
        Ok(start)
    }

    /// # Errors
    ///
    /// Fails if the dice count isn't in `1..=6`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dice == 0 || self.dice > START_DICE {
            return Err(SettingsError::InvalidDice(self.dice));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fresh() {
        let start = TurnStart::default();
        assert_eq!(start.dice, 6);
        assert_eq!(start.score, 0);
        assert!(start.validate().is_ok());
    }

    #[test]
    fn test_continuation_valid() {
        let start = TurnStart::continuation(2, 1000).unwrap();
        assert_eq!(start, TurnStart { dice: 2, score: 1000 });
    }

    #[test]
    fn test_continuation_rejects_bad_dice() {
        assert_eq!(
            TurnStart::continuation(0, 500),
            Err(SettingsError::InvalidDice(0))
        );
        assert_eq!(
            TurnStart::continuation(7, 500),
            Err(SettingsError::InvalidDice(7))
        );
    }

    #[test]
    fn test_deserialize_and_validate() {
        let start: TurnStart = serde_json::from_str(r#"{"dice": 9, "score": 0}"#).unwrap();
        assert!(start.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            SettingsError::InvalidDice(9).to_string(),
            "a turn must start with 1 to 6 dice, not 9"
        );
    }
}
