//! Random card generation with board-uniqueness enforcement.

use rustc_hash::FxHashSet;

use super::{AttributeSet, Card, Color, Shape, COUNTS};
use crate::core::{Difficulty, GameRng};

/// Draws random cards, guaranteeing no duplicate against the live board.
///
/// Owns the session RNG. Collisions are resolved by resampling: with 27
/// (Easy) or 81 (Standard) combinations against a board of at most 12
/// cards, a handful of retries is the worst realistic case, so there is no
/// designed backoff. Asking for a card when the board already holds every
/// combination is a configuration error and panics.
#[derive(Clone, Debug)]
pub struct CardFactory {
    rng: GameRng,
}

impl CardFactory {
    /// Create a factory with a fixed seed. Draw sequences are reproducible.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a factory seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Draw one card whose attribute tuple matches nothing in `existing`.
    pub fn draw(&mut self, difficulty: Difficulty, existing: &[Card]) -> Card {
        assert!(
            existing.len() < difficulty.combinations(),
            "attribute space exhausted: {} cards on board, {} combinations exist",
            existing.len(),
            difficulty.combinations()
        );

        let taken: FxHashSet<AttributeSet> =
            existing.iter().map(|card| card.attributes()).collect();

        loop {
            let candidate = self.sample(difficulty);
            if !taken.contains(&candidate) {
                return Card::new(candidate);
            }
        }
    }

    /// Deal a full board for the given difficulty, all cards unique.
    pub fn deal(&mut self, difficulty: Difficulty) -> Vec<Card> {
        let mut board = Vec::with_capacity(difficulty.board_size());
        for _ in 0..difficulty.board_size() {
            let card = self.draw(difficulty, &board);
            board.push(card);
        }
        board
    }

    /// Sample one value uniformly from each attribute domain.
    fn sample(&mut self, difficulty: Difficulty) -> AttributeSet {
        AttributeSet {
            style: self.pick(difficulty.style_domain()),
            shape: self.pick(&Shape::ALL),
            color: self.pick(&Color::ALL),
            count: self.pick(&COUNTS),
        }
    }

    /// Choose from a domain. Attribute domains are fixed non-empty arrays.
    fn pick<T: Copy>(&mut self, domain: &[T]) -> T {
        *self
            .rng
            .choose(domain)
            .expect("attribute domain is non-empty")
    }
}
