//! Session lifecycle: difficulty, score, and the countdown.

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{BoardController, ToggleOutcome};
use crate::cards::{AttributeSet, CardFactory};
use crate::core::{Difficulty, Directive, InputEvent, OutcomeKind};

const SECS_PER_MIN: u32 = 60;

/// How long transient "SET!" / "Not a Set" indicators stay visible.
const INDICATOR_DURATION: Duration = Duration::from_secs(1);

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No game in progress; the board is empty.
    Idle,
    /// Countdown running, board live.
    Running,
    /// Countdown expired; the board is frozen until the next start.
    Ended,
}

/// A single game of Set, driven entirely by [`InputEvent`]s.
///
/// The session owns the board (which owns the card factory) and all timer
/// arithmetic. It never touches a real clock: the host schedules the
/// repeating tick it is asked for via [`Directive::StartCountdown`] and
/// feeds each expiry back as [`InputEvent::Tick`].
#[derive(Debug)]
pub struct GameSession {
    board: BoardController,
    difficulty: Difficulty,
    phase: SessionPhase,
    score: u32,
    remaining_seconds: u32,
}

impl GameSession {
    /// Create an idle session around a card factory.
    #[must_use]
    pub fn new(factory: CardFactory) -> Self {
        Self {
            board: BoardController::new(factory),
            difficulty: Difficulty::Standard,
            phase: SessionPhase::Idle,
            score: 0,
            remaining_seconds: 0,
        }
    }

    /// Process one event, returning the directives the host must carry out.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Directive> {
        match event {
            InputEvent::StartRequested {
                difficulty,
                minutes,
            } => self.start(difficulty, minutes),
            InputEvent::CardToggled(attributes) => self.card_toggled(attributes),
            InputEvent::RefreshRequested => self.refresh(),
            InputEvent::BackRequested => self.stop(),
            InputEvent::Tick => self.tick(),
        }
    }

    /// Sets found this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The difficulty chosen at the last start.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &BoardController {
        &self.board
    }

    /// Begin a game: reset the score, arm the countdown, deal a board.
    ///
    /// `minutes` must be positive; zero is a host programming error.
    fn start(&mut self, difficulty: Difficulty, minutes: u32) -> Vec<Directive> {
        assert!(minutes > 0, "countdown must be at least one minute");

        self.difficulty = difficulty;
        self.phase = SessionPhase::Running;
        self.score = 0;
        self.remaining_seconds = minutes * SECS_PER_MIN;
        self.board.populate(difficulty);

        info!(
            "session started: {:?}, {} cards, {} seconds",
            difficulty,
            self.board.cards().len(),
            self.remaining_seconds
        );

        vec![
            Directive::RenderBoard(self.board.cards().to_vec()),
            Directive::UpdateScore(0),
            Directive::UpdateClock(format_clock(self.remaining_seconds)),
            Directive::SetRefreshEnabled(true),
            Directive::StartCountdown,
        ]
    }

    fn card_toggled(&mut self, attributes: AttributeSet) -> Vec<Directive> {
        if self.phase != SessionPhase::Running {
            return Vec::new();
        }

        match self.board.toggle(attributes, self.difficulty) {
            ToggleOutcome::Selected => vec![Directive::MarkSelected(attributes, true)],
            ToggleOutcome::Deselected => vec![Directive::MarkSelected(attributes, false)],
            ToggleOutcome::SetFound { replaced, drawn } => {
                self.score += 1;
                debug!("set found, score now {}", self.score);

                let mut out: Vec<Directive> = replaced
                    .iter()
                    .map(|&a| Directive::MarkSelected(a, false))
                    .collect();
                out.push(Directive::RenderBoard(self.board.cards().to_vec()));
                out.push(Directive::UpdateScore(self.score));
                out.push(Directive::ShowOutcome {
                    cards: drawn.map(|card| card.attributes()),
                    kind: OutcomeKind::Set,
                    duration: INDICATOR_DURATION,
                });
                out
            }
            ToggleOutcome::NotASet { cards } => {
                debug!("selection was not a set");

                let mut out: Vec<Directive> = cards
                    .iter()
                    .map(|&a| Directive::MarkSelected(a, false))
                    .collect();
                out.push(Directive::ShowOutcome {
                    cards,
                    kind: OutcomeKind::NotASet,
                    duration: INDICATOR_DURATION,
                });
                out
            }
            ToggleOutcome::Ignored => Vec::new(),
        }
    }

    /// Redeal the board. Score and countdown are untouched; only
    /// permitted while running.
    fn refresh(&mut self) -> Vec<Directive> {
        if self.phase != SessionPhase::Running {
            return Vec::new();
        }
        self.board.refresh(self.difficulty);
        vec![Directive::RenderBoard(self.board.cards().to_vec())]
    }

    /// Back to the menu: cancel the countdown, drop the board, go idle.
    /// The score stays readable until the next start resets it.
    fn stop(&mut self) -> Vec<Directive> {
        if self.phase == SessionPhase::Running {
            info!("session stopped with score {}", self.score);
        }
        self.phase = SessionPhase::Idle;
        self.remaining_seconds = 0;
        self.board.clear();

        vec![
            Directive::StopCountdown,
            Directive::RenderBoard(Vec::new()),
        ]
    }

    /// One second elapsed. At zero the session ends exactly once: the
    /// board freezes, refresh is disabled, and the tick schedule is
    /// cancelled. Ticks outside Running are no-ops.
    fn tick(&mut self) -> Vec<Directive> {
        if self.phase != SessionPhase::Running {
            return Vec::new();
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return vec![Directive::UpdateClock(format_clock(self.remaining_seconds))];
        }

        self.phase = SessionPhase::Ended;
        self.board.freeze();
        info!("time expired, final score {}", self.score);

        vec![
            Directive::UpdateClock(format_clock(0)),
            Directive::SetRefreshEnabled(false),
            Directive::StopCountdown,
        ]
    }
}

/// Format remaining seconds as `mm:ss`, zero-padded.
fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / SECS_PER_MIN, seconds % SECS_PER_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(179), "02:59");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(CardFactory::new(1));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_seconds(), 0);
        assert!(session.board().cards().is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one minute")]
    fn test_zero_minute_start_panics() {
        let mut session = GameSession::new(CardFactory::new(1));
        session.handle(InputEvent::StartRequested {
            difficulty: Difficulty::Easy,
            minutes: 0,
        });
    }

    #[test]
    fn test_session_phase_serde_round_trip() {
        for phase in [
            SessionPhase::Idle,
            SessionPhase::Running,
            SessionPhase::Ended,
        ] {
            let json = serde_json::to_string(&phase).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut session = GameSession::new(CardFactory::new(1));
        assert!(session.handle(InputEvent::Tick).is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }
}
