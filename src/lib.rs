//! # set-core
//!
//! Core rules engine for the card game Set: a board of attribute-coded
//! cards, three-card selections judged as sets, and a countdown-gated
//! session.
//!
//! ## Design Principles
//!
//! 1. **Host-agnostic**: no rendering, no real timers, no event listeners.
//!    A host feeds [`InputEvent`]s in and carries out the returned
//!    [`Directive`]s; display and clock live entirely behind that
//!    boundary.
//!
//! 2. **Structured identity**: a card *is* its four-attribute tuple.
//!    The dash-separated string form exists only for the display boundary,
//!    never as the source of truth.
//!
//! 3. **Single-threaded and synchronous**: events are processed one at a
//!    time in arrival order. There is no locking and no async; the only
//!    timer is the host's.
//!
//! ## Modules
//!
//! - `core`: difficulty, RNG, input events and display directives
//! - `cards`: attribute domains, card identity, random generation
//! - `rules`: the set-judging function
//! - `board`: the live board and its selection cycle
//! - `session`: score, countdown, and lifecycle

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Difficulty, Directive, GameRng, InputEvent, OutcomeKind};

pub use crate::cards::{
    AttributeSet, Card, CardFactory, Color, ParseAttributeSetError, Shape, Style, COUNTS,
};

pub use crate::rules::{is_set, SET_SIZE};

pub use crate::board::{BoardController, ToggleOutcome};

pub use crate::session::{GameSession, SessionPhase};
