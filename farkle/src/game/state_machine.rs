//! Turn state machine.
//!
//! A turn alternates between rolling the available dice and keeping a
//! scoring subset of them. It ends when the player banks, or when a roll
//! turns up nothing that scores and the turn busts.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::{MAX_DIE, MIN_DIE, START_DICE};
use super::entities::{KeepGroup, Points, Position, Roll, TurnOutcome, TurnSummary};
use super::functional::resolve_keep;
use super::random::DieSource;
use super::settings::{SettingsError, TurnStart};

/// Errors that can occur while playing a turn. None of them change the
/// turn.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum TurnError {
    #[error("can only keep {available} dice, not {requested}")]
    OverKeep { requested: usize, available: usize },
    #[error("invalid keep selection: {0:?} don't score")]
    UnresolvableSelection(Vec<Position>),
    #[error("must keep at least one die")]
    EmptySelection,
    #[error("die {0} selected more than once")]
    DuplicatePosition(Position),
    #[error("nothing rolled to keep from")]
    NoRoll,
    #[error("must keep dice from the last roll before rolling again")]
    RollPending,
    #[error("turn is over")]
    TurnOver,
    #[error("die source returned {0}")]
    InvalidDie(u8),
    #[error("keeping {gained} more points would overflow a score of {score}")]
    ScoreOverflow { score: Points, gained: Points },
}

/// Result type for turn operations
pub type TurnResult<T> = Result<T, TurnError>;

/// Where a turn is in its lifecycle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TurnPhase {
    /// Dice are ready to be rolled.
    AwaitingRoll,
    /// A scoring roll is waiting for dice to be kept.
    RollResolved,
    /// A roll didn't score. Terminal.
    Busted,
    /// The player stopped and kept the score. Terminal.
    Banked,
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::AwaitingRoll => "awaiting roll",
            Self::RollResolved => "roll resolved",
            Self::Busted => "busted",
            Self::Banked => "banked",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Debug)]
pub struct Turn {
    available: usize,
    /// Cleared once dice are kept from it or the turn is banked.
    current_roll: Option<Roll>,
    score: Points,
    /// Dice kept so far, one entry per scoring combination.
    keep_groups: Vec<KeepGroup>,
    /// Every roll made this turn, busts included.
    rolls: Vec<Roll>,
    phase: TurnPhase,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<TurnStart> for Turn {
    type Error = SettingsError;

    fn try_from(start: TurnStart) -> Result<Self, Self::Error> {
        start.validate()?;
        Ok(Self::starting(start))
    }
}

impl Turn {
    /// A fresh turn with six dice and no score.
    #[must_use]
    pub fn new() -> Self {
        Self::starting(TurnStart::fresh())
    }

    fn starting(start: TurnStart) -> Self {
        Self {
            available: start.dice,
            current_roll: None,
            score: start.score,
            keep_groups: Vec::new(),
            rolls: Vec::new(),
            phase: TurnPhase::AwaitingRoll,
        }
    }

    /// Roll every available die.
    ///
    /// If nothing in the roll scores, the turn busts: all points gathered
    /// this turn are lost and no dice are left.
    ///
    /// # Errors
    ///
    /// Fails if the previous roll hasn't been kept from yet, if the turn
    /// is over, or if `source` produces a value that isn't a die face.
    pub fn roll<R: DieSource + ?Sized>(&mut self, source: &mut R) -> TurnResult<Roll> {
        match self.phase {
            TurnPhase::AwaitingRoll => {}
            TurnPhase::RollResolved => return Err(TurnError::RollPending),
            TurnPhase::Busted | TurnPhase::Banked => return Err(TurnError::TurnOver),
        }

        let mut dice = Vec::with_capacity(self.available);
        for _ in 0..self.available {
            let value = source.roll_die();
            if !(MIN_DIE..=MAX_DIE).contains(&value) {
                warn!("die source returned {value}, discarding roll");
                return Err(TurnError::InvalidDie(value));
            }
            dice.push(value);
        }
        let roll = Roll(dice);
        self.rolls.push(roll.clone());

        if roll.score().is_empty() {
            info!("rolled {roll}: bust, {} points lost", self.score);
            self.available = 0;
            self.score = 0;
            self.phase = TurnPhase::Busted;
        } else {
            debug!("rolled {roll}");
            self.phase = TurnPhase::RollResolved;
        }
        self.current_roll = Some(roll.clone());
        Ok(roll)
    }

    /// Keep the dice at `positions` of the current roll.
    ///
    /// The positions must split into non-overlapping scoring combinations.
    /// Each combination becomes its own keep group. Keeping the last of
    /// the available dice gives the player all six back ("hot dice").
    ///
    /// Returns the points gained.
    ///
    /// # Errors
    ///
    /// Fails without changing the turn if there's no roll to keep from,
    /// the selection is empty, repeats a die, asks for more dice than are
    /// available, doesn't score as a whole, or would push the score past
    /// `Points::MAX`.
    pub fn keep(&mut self, positions: &[Position]) -> TurnResult<Points> {
        let roll = match (self.phase, &self.current_roll) {
            (TurnPhase::RollResolved, Some(roll)) => roll,
            (TurnPhase::Busted | TurnPhase::Banked, _) => return Err(TurnError::TurnOver),
            _ => return Err(TurnError::NoRoll),
        };

        if positions.is_empty() {
            return Err(TurnError::EmptySelection);
        }
        let kept = positions.len();
        if kept > self.available {
            return Err(TurnError::OverKeep {
                requested: kept,
                available: self.available,
            });
        }
        let mut sorted = positions.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(TurnError::DuplicatePosition(pair[0]));
        }

        let scorings = roll.score();
        let matched = resolve_keep(&scorings, &sorted).map_err(|remaining| {
            warn!("can't keep {remaining:?} from {roll}");
            TurnError::UnresolvableSelection(remaining)
        })?;

        let groups: Vec<KeepGroup> = matched
            .into_iter()
            .map(|scoring| KeepGroup {
                dice: roll.pick(&scoring.positions),
                score: scoring.score,
            })
            .collect();
        let gained: Points = groups.iter().map(|g| g.score).sum();
        let score = self
            .score
            .checked_add(gained)
            .ok_or(TurnError::ScoreOverflow {
                score: self.score,
                gained,
            })?;
        debug!("kept {kept} dice from {roll} for {gained}");

        self.keep_groups.extend(groups);
        self.score = score;
        self.available -= kept;
        if self.available == 0 {
            debug!("hot dice");
            self.available = START_DICE;
        }
        self.current_roll = None;
        self.phase = TurnPhase::AwaitingRoll;
        Ok(gained)
    }

    /// Stop rolling and keep the points gathered so far.
    ///
    /// # Errors
    ///
    /// Fails if the turn is already over.
    pub fn bank(&mut self) -> TurnResult<TurnSummary> {
        if self.is_over() {
            return Err(TurnError::TurnOver);
        }
        self.current_roll = None;
        self.phase = TurnPhase::Banked;
        info!("banked {} points with {} dice left", self.score, self.available);
        Ok(self.summary())
    }

    /// Points this turn is worth. Zero after a bust.
    #[must_use]
    pub fn result(&self) -> Points {
        self.score
    }

    #[must_use]
    pub fn dice_available(&self) -> usize {
        self.available
    }

    #[must_use]
    pub fn current_roll(&self) -> Option<&Roll> {
        self.current_roll.as_ref()
    }

    #[must_use]
    pub fn keep_groups(&self) -> &[KeepGroup] {
        &self.keep_groups
    }

    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.phase == TurnPhase::Busted
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::Busted | TurnPhase::Banked)
    }

    /// Snapshot of the turn as it would be handed off.
    #[must_use]
    pub fn summary(&self) -> TurnSummary {
        TurnSummary {
            outcome: if self.is_bust() {
                TurnOutcome::Busted
            } else {
                TurnOutcome::Banked
            },
            dice_available: self.available,
            score: self.score,
            keep_groups: self.keep_groups.clone(),
        }
    }
}
