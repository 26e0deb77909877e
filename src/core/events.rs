//! Input events and display directives: the engine's only boundary.
//!
//! The engine has no network, file, or timer surface of its own. A host
//! (a UI layer, a test harness) feeds it [`InputEvent`]s one at a time and
//! carries out the [`Directive`]s it returns. Events are processed
//! synchronously in arrival order on a single thread; a tick arriving
//! between two toggles is just another event in the queue.
//!
//! Timing is fully externalized. `StartCountdown` asks the host's clock for
//! a repeating 1-second callback delivered back as [`InputEvent::Tick`];
//! `ShowOutcome` carries the duration the indicator should stay visible and
//! the host owns the auto-clear. If the board changes before an indicator
//! clears, the clear targets a card that is no longer displayed and the
//! host drops it; the engine tolerates the matching stale toggle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeSet, Card};
use crate::core::Difficulty;

/// Result of judging three selected cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The three cards form a valid set.
    Set,
    /// The three cards do not form a set.
    NotASet,
}

/// An event flowing from the host into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The player clicked a card, identified by its attribute tuple.
    CardToggled(AttributeSet),
    /// The player started a game from the menu.
    StartRequested {
        difficulty: Difficulty,
        /// Countdown duration in whole minutes. Must be positive.
        minutes: u32,
    },
    /// The player navigated back to the menu.
    BackRequested,
    /// The player asked for a fresh board.
    RefreshRequested,
    /// One second elapsed on the host clock.
    Tick,
}

/// An instruction flowing from the engine to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    /// Replace the displayed board with these cards, in order.
    RenderBoard(Vec<Card>),
    /// Set or clear the selected highlight on one card.
    MarkSelected(AttributeSet, bool),
    /// Show a transient outcome indicator on three cards, auto-clearing
    /// after `duration`. The host owns the clear timer; it is
    /// fire-and-forget and never cancelled.
    ShowOutcome {
        cards: [AttributeSet; 3],
        kind: OutcomeKind,
        duration: Duration,
    },
    /// Display the number of sets found.
    UpdateScore(u32),
    /// Display the remaining time, formatted `mm:ss`.
    UpdateClock(String),
    /// Enable or disable the board-refresh control.
    SetRefreshEnabled(bool),
    /// Schedule a repeating 1-second tick, delivered as [`InputEvent::Tick`].
    StartCountdown,
    /// Cancel the repeating tick.
    StopCountdown,
}
