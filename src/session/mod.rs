//! Game sessions: lifecycle, score, and countdown.

pub mod game;

pub use game::{GameSession, SessionPhase};
