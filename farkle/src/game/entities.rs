use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fmt::{self},
    ops::Deref,
};

use super::constants;

/// Type alias for points. Every score in the game is a whole number of
/// points and never negative.
pub type Points = u32;

/// Type alias for a position into a [`Roll`]. Positions identify dice
/// independently of their values since several dice can share a value.
pub type Position = usize;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Username(String);

impl Username {
    /// Whitespace becomes `_` and the name is cut to 32 characters.
    pub fn new(s: &str) -> Self {
        let username = s
            .chars()
            .map(|c| if c.is_ascii_whitespace() { '_' } else { c })
            .take(constants::MAX_NAME_LENGTH)
            .collect();
        Self(username)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An ordered set of die values. The index of a value is the identity of
/// the die that shows it.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Roll(pub Vec<u8>);

impl Roll {
    /// Enumerate every scoring combination in this roll, highest score
    /// first.
    #[must_use]
    pub fn score(&self) -> Vec<Scoring> {
        super::functional::eval(self)
    }

    /// Die values at the given positions, in the order given.
    ///
    /// Positions must be in bounds.
    pub(crate) fn pick(&self, positions: &[Position]) -> Roll {
        Roll(positions.iter().map(|&p| self.0[p]).collect())
    }
}

impl Deref for Roll {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for Roll {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[u8; N]> for Roll {
    fn from(value: [u8; N]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{repr}]")
    }
}

/// Positions of a roll grouped by die value. Index 0 holds the positions
/// showing a one, index 5 the positions showing a six. Each list is in
/// ascending order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueBreakdown([Vec<Position>; constants::MAX_DIE as usize]);

impl ValueBreakdown {
    /// Positions showing `value`. Values outside 1..=6 have no positions.
    #[must_use]
    pub fn positions(&self, value: u8) -> &[Position] {
        match value {
            constants::MIN_DIE..=constants::MAX_DIE => &self.0[usize::from(value - 1)],
            _ => &[],
        }
    }

    /// `(value, positions)` pairs for every value that appears at least
    /// once, lowest value first.
    pub fn present(&self) -> impl Iterator<Item = (u8, &[Position])> {
        (constants::MIN_DIE..=constants::MAX_DIE)
            .map(|value| (value, self.positions(value)))
            .filter(|(_, positions)| !positions.is_empty())
    }

    /// Number of distinct values in the roll.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.present().count()
    }

    /// Total number of dice in the roll.
    #[must_use]
    pub fn dice(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Every position of the roll in ascending order.
    #[must_use]
    pub fn all_positions(&self) -> Vec<Position> {
        (0..self.dice()).collect()
    }
}

impl From<&Roll> for ValueBreakdown {
    fn from(roll: &Roll) -> Self {
        let mut breakdown = Self::default();
        for (position, &value) in roll.iter().enumerate() {
            if (constants::MIN_DIE..=constants::MAX_DIE).contains(&value) {
                breakdown.0[usize::from(value - 1)].push(position);
            }
        }
        breakdown
    }
}

/// A scoring combination: how many points a rule awards and which dice
/// of the roll it uses. Combinations found in the same roll may share
/// positions.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Scoring {
    pub score: Points,
    /// Ascending, never empty.
    pub positions: Vec<Position>,
}

impl Scoring {
    #[must_use]
    pub fn new(score: Points, positions: Vec<Position>) -> Self {
        Self { score, positions }
    }

    /// Whether every position of this combination is in `positions`.
    #[must_use]
    pub fn is_within(&self, positions: &[Position]) -> bool {
        !self.positions.is_empty() && self.positions.iter().all(|p| positions.contains(p))
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:?}", self.score, self.positions)
    }
}

/// Dice kept together as one scoring unit.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KeepGroup {
    pub dice: Roll,
    pub score: Points,
}

impl fmt::Display for KeepGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.dice, self.score)
    }
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TurnOutcome {
    Banked,
    Busted,
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Banked => "banked",
            Self::Busted => "busted",
        };
        write!(f, "{repr}")
    }
}

/// Record of a finished turn. The dice and score are what gets handed to
/// whoever plays next.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TurnSummary {
    pub outcome: TurnOutcome,
    pub dice_available: usize,
    pub score: Points,
    pub keep_groups: Vec<KeepGroup>,
}

impl fmt::Display for TurnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} points and {} dice left",
            self.outcome, self.score, self.dice_available
        )
    }
}
