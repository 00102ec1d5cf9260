//! Farkle game engine - scoring rules and turn FSM.
//!
//! This module provides the rules engine:
//! - Fixed scoring rule table and the scoring engine
//! - Greedy keep resolution over overlapping combinations
//! - Turn state machine (roll, keep, bank, bust, hot dice)
//! - Players with turn history and handoff

pub mod constants;
pub mod entities;
pub mod functional;
pub mod player;
pub mod random;
pub mod settings;
pub mod state_machine;

pub use player::{Player, PlayerError, PlayerResult, TurnHandoff};
pub use random::{DieSource, RandomDie, ScriptedDice};
pub use settings::{SettingsError, TurnStart};
pub use state_machine::{Turn, TurnError, TurnPhase, TurnResult};
