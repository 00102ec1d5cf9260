//! # Farkle
//!
//! Rules engine for Farkle, a dice game where players push their luck
//! across repeated rolls of up to six dice.
//!
//! A roll is scored against a fixed rule table. The player keeps a subset
//! of the dice that splits into scoring combinations and rolls the rest,
//! or banks. A roll where nothing scores is a bust and loses every point
//! gathered that turn. Keeping all the dice that were rolled hands back a
//! fresh six ("hot dice").
//!
//! ## Scoring
//!
//! | Combination | Points |
//! |---|---|
//! | Six of a kind | 3000 |
//! | Two triplets | 2500 |
//! | Five of a kind | 2000 |
//! | Straight (1-6) | 1500 |
//! | Three pairs (or four of a kind and a pair) | 1500 |
//! | Four of a kind | 1000 |
//! | Three of a kind | face × 100 (three ones: 300) |
//! | Single one | 100 |
//! | Single five | 50 |
//!
//! ## Core Modules
//!
//! - [`game::functional`]: scoring rules, scoring engine, keep resolution
//! - [`game::state_machine`]: the turn FSM
//! - [`game::player`]: players, turn history and handoff
//!
//! ## Example
//!
//! ```
//! use farkle::{Player, ScriptedDice};
//!
//! let mut handed_off = Vec::new();
//! {
//!     let dice = ScriptedDice::new(vec![1, 1, 1, 5, 2, 3]);
//!     let handoff = |dice: usize, score: u32| handed_off.push((dice, score));
//!     let mut player = Player::new("alice", dice, handoff);
//!
//!     player.reject().unwrap();
//!     player.roll().unwrap();
//!     player.keep(&[0, 1, 2, 3]).unwrap();
//!     player.bank().unwrap();
//!     assert_eq!(player.score(), 350);
//! }
//! assert_eq!(handed_off, vec![(2, 350)]);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    DieSource, Player, PlayerError, PlayerResult, RandomDie, ScriptedDice, SettingsError, Turn,
    TurnError, TurnHandoff, TurnPhase, TurnResult, TurnStart,
    constants::{self, START_DICE},
    entities::{self, KeepGroup, Points, Roll, Scoring, TurnOutcome, TurnSummary, Username},
    functional::{self, eval, resolve_keep},
};
