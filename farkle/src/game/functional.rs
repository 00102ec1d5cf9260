//! Scoring rules and keep resolution.
//!
//! Everything here is a pure function of a roll. [`eval`] runs the fixed
//! rule table over a roll and [`resolve_keep`] decides whether a set of
//! kept positions decomposes into scoring combinations.

use enum_dispatch::enum_dispatch;
use std::fmt;

use super::constants::{
    FIVE_OF_A_KIND_POINTS, FOUR_OF_A_KIND_POINTS, MAX_DIE, SINGLE_FIVE_POINTS,
    SINGLE_ONE_POINTS, SIX_OF_A_KIND_POINTS, START_DICE, STRAIGHT_POINTS, THREE_DOUBLES_POINTS,
    THREE_ONES_POINTS, TRIPLET_MULTIPLIER, TWO_TRIPLETS_POINTS,
};
use super::entities::{Points, Position, Roll, Scoring, ValueBreakdown};

/// A single scoring rule.
#[enum_dispatch]
pub trait Scorer {
    /// Every combination this rule finds in the roll. Empty if the rule
    /// doesn't apply.
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring>;

    fn name(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SixOfAKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Straight;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TwoTriplets;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThreeDoubles;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FiveOfAKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FourOfAKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThreeOfAKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ones;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fives;

/// The closed set of scoring rules.
#[enum_dispatch(Scorer)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScorerRule {
    SixOfAKind,
    Straight,
    TwoTriplets,
    ThreeDoubles,
    FiveOfAKind,
    FourOfAKind,
    ThreeOfAKind,
    Ones,
    Fives,
}

impl ScorerRule {
    /// All rules in evaluation order.
    pub const TABLE: [ScorerRule; 9] = [
        ScorerRule::SixOfAKind(SixOfAKind),
        ScorerRule::Straight(Straight),
        ScorerRule::TwoTriplets(TwoTriplets),
        ScorerRule::ThreeDoubles(ThreeDoubles),
        ScorerRule::FiveOfAKind(FiveOfAKind),
        ScorerRule::FourOfAKind(FourOfAKind),
        ScorerRule::ThreeOfAKind(ThreeOfAKind),
        ScorerRule::Ones(Ones),
        ScorerRule::Fives(Fives),
    ];
}

impl fmt::Display for ScorerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One combination per value appearing exactly `count` times.
fn of_a_kind(
    breakdown: &ValueBreakdown,
    count: usize,
    points: impl Fn(u8) -> Points,
) -> Vec<Scoring> {
    breakdown
        .present()
        .filter(|(_, positions)| positions.len() == count)
        .map(|(value, positions)| Scoring::new(points(value), positions.to_vec()))
        .collect()
}

/// One single-die combination per position showing `value`.
fn singles(breakdown: &ValueBreakdown, value: u8, points: Points) -> Vec<Scoring> {
    breakdown
        .positions(value)
        .iter()
        .map(|&position| Scoring::new(points, vec![position]))
        .collect()
}

/// A single combination over the whole roll if `matches` holds for the
/// multiplicities of the values present.
fn whole_roll(
    breakdown: &ValueBreakdown,
    points: Points,
    matches: impl Fn(&[usize]) -> bool,
) -> Vec<Scoring> {
    if breakdown.dice() != START_DICE {
        return vec![];
    }
    let mut counts: Vec<usize> = breakdown.present().map(|(_, p)| p.len()).collect();
    counts.sort_unstable();
    if matches(&counts) {
        vec![Scoring::new(points, breakdown.all_positions())]
    } else {
        vec![]
    }
}

impl Scorer for SixOfAKind {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        of_a_kind(breakdown, 6, |_| SIX_OF_A_KIND_POINTS)
    }

    fn name(&self) -> &'static str {
        "six of a kind"
    }
}

impl Scorer for Straight {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        if breakdown.distinct() != usize::from(MAX_DIE) {
            return vec![];
        }
        whole_roll(breakdown, STRAIGHT_POINTS, |counts| counts.iter().all(|&c| c == 1))
    }

    fn name(&self) -> &'static str {
        "straight"
    }
}

impl Scorer for TwoTriplets {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        whole_roll(breakdown, TWO_TRIPLETS_POINTS, |counts| counts == [3, 3])
    }

    fn name(&self) -> &'static str {
        "two triplets"
    }
}

impl Scorer for ThreeDoubles {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        // Four of a kind plus a pair counts as three doubles.
        whole_roll(breakdown, THREE_DOUBLES_POINTS, |counts| {
            counts == [2, 2, 2] || counts == [2, 4]
        })
    }

    fn name(&self) -> &'static str {
        "three doubles"
    }
}

impl Scorer for FiveOfAKind {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        of_a_kind(breakdown, 5, |_| FIVE_OF_A_KIND_POINTS)
    }

    fn name(&self) -> &'static str {
        "five of a kind"
    }
}

impl Scorer for FourOfAKind {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        of_a_kind(breakdown, 4, |_| FOUR_OF_A_KIND_POINTS)
    }

    fn name(&self) -> &'static str {
        "four of a kind"
    }
}

impl Scorer for ThreeOfAKind {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        of_a_kind(breakdown, 3, |value| match value {
            1 => THREE_ONES_POINTS,
            v => Points::from(v) * TRIPLET_MULTIPLIER,
        })
    }

    fn name(&self) -> &'static str {
        "three of a kind"
    }
}

impl Scorer for Ones {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        singles(breakdown, 1, SINGLE_ONE_POINTS)
    }

    fn name(&self) -> &'static str {
        "ones"
    }
}

impl Scorer for Fives {
    fn score(&self, breakdown: &ValueBreakdown) -> Vec<Scoring> {
        singles(breakdown, 5, SINGLE_FIVE_POINTS)
    }

    fn name(&self) -> &'static str {
        "fives"
    }
}

/// Every scoring combination in `roll`, highest score first.
///
/// Combinations aren't deduplicated: a triplet of ones is reported along
/// with each of the three single ones it contains. Equal scores keep rule
/// table order, then ascending position order. An empty result means the
/// roll is a bust.
#[must_use]
pub fn eval(roll: &Roll) -> Vec<Scoring> {
    let breakdown = ValueBreakdown::from(roll);
    let mut scorings: Vec<Scoring> = ScorerRule::TABLE
        .iter()
        .flat_map(|rule| rule.score(&breakdown))
        .collect();
    scorings.sort_by(|a, b| b.score.cmp(&a.score));
    scorings
}

/// Decompose `positions` into non-overlapping combinations from
/// `scorings`.
///
/// `positions` must be ascending and free of repeats, and `scorings` sorted
/// the way [`eval`] sorts them. A combination covering exactly `positions`
/// wins outright. Otherwise combinations are tried once each, in order,
/// and any that fits entirely inside what's still unclaimed is taken.
/// This single greedy pass can miss a decomposition that exists, and
/// that's the rule as played.
///
/// # Errors
///
/// Returns the positions no combination could claim.
pub fn resolve_keep<'a>(
    scorings: &'a [Scoring],
    positions: &[Position],
) -> Result<Vec<&'a Scoring>, Vec<Position>> {
    if let Some(exact) = scorings.iter().find(|s| s.positions == positions) {
        return Ok(vec![exact]);
    }

    let mut remaining = positions.to_vec();
    let mut accepted = Vec::new();
    for scoring in scorings {
        if remaining.is_empty() {
            break;
        }
        if scoring.is_within(&remaining) {
            remaining.retain(|p| !scoring.positions.contains(p));
            accepted.push(scoring);
        }
    }

    if remaining.is_empty() {
        Ok(accepted)
    } else {
        Err(remaining)
    }
}
