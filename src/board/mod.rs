//! Board state: the live cards and the selection cycle.

pub mod controller;

pub use controller::{BoardController, ToggleOutcome};
