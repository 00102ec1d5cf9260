//! Players and turn handoff.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Points, Position, Roll, TurnSummary, Username};
use super::random::DieSource;
use super::settings::{SettingsError, TurnStart};
use super::state_machine::{Turn, TurnError};

/// Errors that can occur during player operations
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum PlayerError {
    #[error("no current turn for player {0}")]
    NoActiveTurn(Username),
    #[error("player {0} already has a turn in progress")]
    TurnInProgress(Username),
    #[error(transparent)]
    InvalidStart(#[from] SettingsError),
    #[error(transparent)]
    Turn(#[from] TurnError),
}

/// Result type for player operations
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Receives the leftovers of every finished turn. Whoever implements this
/// decides what the next player gets offered.
pub trait TurnHandoff {
    fn on_turn_complete(&mut self, dice_available: usize, score: Points);
}

impl<F> TurnHandoff for F
where
    F: FnMut(usize, Points),
{
    fn on_turn_complete(&mut self, dice_available: usize, score: Points) {
        self(dice_available, score);
    }
}

/// A player with a history of finished turns and at most one turn in
/// play.
#[derive(Debug)]
pub struct Player<R, H> {
    name: Username,
    source: R,
    handoff: H,
    turns: Vec<Turn>,
    current: Option<Turn>,
}

impl<R: DieSource, H: TurnHandoff> Player<R, H> {
    pub fn new(name: &str, source: R, handoff: H) -> Self {
        Self {
            name: Username::new(name),
            source,
            handoff,
            turns: Vec::new(),
            current: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &Username {
        &self.name
    }

    /// Total of every finished turn, capped at `Points::MAX`.
    #[must_use]
    pub fn score(&self) -> Points {
        self.turns
            .iter()
            .fold(0, |total: Points, turn| total.saturating_add(turn.result()))
    }

    /// Start a turn with the dice and score the previous player left.
    ///
    /// # Errors
    ///
    /// Fails if a turn is already in progress or `dice` isn't in `1..=6`.
    pub fn accept(&mut self, dice: usize, score: Points) -> PlayerResult<()> {
        let start = TurnStart::continuation(dice, score)?;
        self.start(start)
    }

    /// Start a fresh turn with six dice and no score.
    ///
    /// # Errors
    ///
    /// Fails if a turn is already in progress.
    pub fn reject(&mut self) -> PlayerResult<()> {
        self.start(TurnStart::fresh())
    }

    fn start(&mut self, start: TurnStart) -> PlayerResult<()> {
        if self.current.is_some() {
            return Err(PlayerError::TurnInProgress(self.name.clone()));
        }
        self.current = Some(Turn::try_from(start)?);
        Ok(())
    }

    /// Roll the active turn's dice. A bust ends the turn on the spot.
    ///
    /// # Errors
    ///
    /// Fails if there's no active turn, or the turn refuses to roll.
    pub fn roll(&mut self) -> PlayerResult<Roll> {
        let turn = self
            .current
            .as_mut()
            .ok_or_else(|| PlayerError::NoActiveTurn(self.name.clone()))?;
        let roll = turn.roll(&mut self.source)?;
        if turn.is_bust() {
            if let Some(turn) = self.current.take() {
                self.finish(turn);
            }
        }
        Ok(roll)
    }

    /// Keep dice from the active turn's last roll.
    ///
    /// # Errors
    ///
    /// Fails if there's no active turn or the selection is invalid.
    pub fn keep(&mut self, positions: &[Position]) -> PlayerResult<Points> {
        let turn = self
            .current
            .as_mut()
            .ok_or_else(|| PlayerError::NoActiveTurn(self.name.clone()))?;
        Ok(turn.keep(positions)?)
    }

    /// End the active turn and keep its score.
    ///
    /// # Errors
    ///
    /// Fails if there's no active turn.
    pub fn bank(&mut self) -> PlayerResult<TurnSummary> {
        let mut turn = self
            .current
            .take()
            .ok_or_else(|| PlayerError::NoActiveTurn(self.name.clone()))?;
        if let Err(e) = turn.bank() {
            self.current = Some(turn);
            return Err(e.into());
        }
        Ok(self.finish(turn))
    }

    fn finish(&mut self, turn: Turn) -> TurnSummary {
        let summary = turn.summary();
        info!("{} {summary}", self.name);
        self.turns.push(turn);
        self.handoff
            .on_turn_complete(summary.dice_available, summary.score);
        summary
    }

    #[must_use]
    pub fn active_turn(&self) -> Option<&Turn> {
        self.current.as_ref()
    }

    /// Finished turns, oldest first.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn history(&self) -> Vec<TurnSummary> {
        self.turns.iter().map(Turn::summary).collect()
    }
}
