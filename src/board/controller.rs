//! The live board: cards, selection state, and mutation on set resolution.

use smallvec::SmallVec;

use crate::cards::{AttributeSet, Card, CardFactory};
use crate::core::Difficulty;
use crate::rules::{is_set, SET_SIZE};

/// What a single toggle did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The card joined the selection (now 1 or 2 cards).
    Selected,
    /// The card was already selected and left the selection.
    Deselected,
    /// Third selection completed a valid set. The three cards at
    /// `replaced` were swapped in place for the freshly drawn cards.
    SetFound {
        replaced: [AttributeSet; 3],
        drawn: [Card; 3],
    },
    /// Third selection did not form a set; the board is unchanged.
    NotASet { cards: [AttributeSet; 3] },
    /// The board is frozen, or the card is not on the board (a stale
    /// reference from an indicator that outlived its card). Nothing
    /// happened.
    Ignored,
}

/// Owns the displayed cards and the 0-3 card selection cycle.
///
/// Invariants:
/// - no two cards on the board share an attribute tuple;
/// - the selection is a subset of the board, cleared at exactly three
///   before the outcome is surfaced;
/// - a frozen board ignores every toggle until repopulated.
#[derive(Clone, Debug)]
pub struct BoardController {
    cards: Vec<Card>,
    selection: SmallVec<[AttributeSet; SET_SIZE]>,
    factory: CardFactory,
    frozen: bool,
}

impl BoardController {
    /// Create an empty, unfrozen board around a card factory.
    #[must_use]
    pub fn new(factory: CardFactory) -> Self {
        Self {
            cards: Vec::new(),
            selection: SmallVec::new(),
            factory,
            frozen: false,
        }
    }

    /// Deal a full board for the difficulty, discarding any previous
    /// cards, selection, and frozen state.
    pub fn populate(&mut self, difficulty: Difficulty) {
        self.cards = self.factory.deal(difficulty);
        self.selection.clear();
        self.frozen = false;
    }

    /// The displayed cards, in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The attribute tuples currently toggled on, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[AttributeSet] {
        &self.selection
    }

    /// Whether the board has been frozen by session end.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Toggle a card's selection membership.
    ///
    /// The first two selections accumulate; the third clears the selection
    /// and evaluates. On a valid set the three cards are replaced in place
    /// by unique draws against the post-removal board.
    pub fn toggle(&mut self, attributes: AttributeSet, difficulty: Difficulty) -> ToggleOutcome {
        if self.frozen {
            return ToggleOutcome::Ignored;
        }
        if !self.cards.iter().any(|c| c.attributes() == attributes) {
            return ToggleOutcome::Ignored;
        }

        if let Some(pos) = self.selection.iter().position(|s| *s == attributes) {
            self.selection.remove(pos);
            return ToggleOutcome::Deselected;
        }

        self.selection.push(attributes);
        if self.selection.len() < SET_SIZE {
            return ToggleOutcome::Selected;
        }

        // Third selection: clear before surfacing the outcome, so the
        // board is unselected whichever way the judgment goes.
        let picked = [self.selection[0], self.selection[1], self.selection[2]];
        self.selection.clear();

        if is_set(&picked.map(Card::new)) {
            let drawn = self.replace_cards(&picked, difficulty);
            ToggleOutcome::SetFound {
                replaced: picked,
                drawn,
            }
        } else {
            ToggleOutcome::NotASet { cards: picked }
        }
    }

    /// Swap each matched card for a fresh unique draw, preserving board
    /// order. Each draw runs against the post-removal board, so the
    /// replacements cannot collide with surviving cards or each other.
    fn replace_cards(&mut self, picked: &[AttributeSet; 3], difficulty: Difficulty) -> [Card; 3] {
        let mut drawn: SmallVec<[Card; SET_SIZE]> = SmallVec::new();
        for &attributes in picked {
            let pos = self
                .cards
                .iter()
                .position(|c| c.attributes() == attributes)
                .expect("selected card is on the board");
            self.cards.remove(pos);
            let fresh = self.factory.draw(difficulty, &self.cards);
            self.cards.insert(pos, fresh);
            drawn.push(fresh);
        }
        [drawn[0], drawn[1], drawn[2]]
    }

    /// Throw away the whole board and deal a fresh one. Selection is
    /// cleared; nothing else about the session changes.
    pub fn refresh(&mut self, difficulty: Difficulty) {
        self.cards = self.factory.deal(difficulty);
        self.selection.clear();
    }

    /// Detach the board from further selection. Idempotent; also clears
    /// any partial selection, matching the end-of-game display.
    pub fn freeze(&mut self) {
        self.frozen = true;
        self.selection.clear();
    }

    /// Remove every card, returning to the pre-session empty state.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.selection.clear();
        self.frozen = false;
    }
}
