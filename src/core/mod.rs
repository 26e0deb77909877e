//! Core engine types: difficulty, RNG, and the host-facing event boundary.
//!
//! Everything the host exchanges with the engine lives here. The host feeds
//! [`InputEvent`]s to a session and fulfills the [`Directive`]s it gets back.

pub mod difficulty;
pub mod events;
pub mod rng;

pub use difficulty::Difficulty;
pub use events::{Directive, InputEvent, OutcomeKind};
pub use rng::GameRng;
