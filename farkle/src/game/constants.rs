//! Fixed rule constants.

use super::entities::Points;

/// Number of dice a fresh turn starts with, and the number a turn
/// resets to after "hot dice".
pub const START_DICE: usize = 6;

/// Lowest face on a die.
pub const MIN_DIE: u8 = 1;

/// Highest face on a die.
pub const MAX_DIE: u8 = 6;

pub const SIX_OF_A_KIND_POINTS: Points = 3_000;
pub const TWO_TRIPLETS_POINTS: Points = 2_500;
pub const FIVE_OF_A_KIND_POINTS: Points = 2_000;
pub const STRAIGHT_POINTS: Points = 1_500;
pub const THREE_DOUBLES_POINTS: Points = 1_500;
pub const FOUR_OF_A_KIND_POINTS: Points = 1_000;

/// Three ones score like three threes; every other triplet scores
/// its face value times one hundred.
pub const THREE_ONES_POINTS: Points = 300;
pub const TRIPLET_MULTIPLIER: Points = 100;

pub const SINGLE_ONE_POINTS: Points = 100;
pub const SINGLE_FIVE_POINTS: Points = 50;

/// Player names longer than this are truncated.
pub const MAX_NAME_LENGTH: usize = 32;
