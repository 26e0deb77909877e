//! Difficulty levels.
//!
//! Difficulty is chosen once at session start and fixed for the session's
//! lifetime. It controls exactly two things: the board size and the style
//! domain available to card generation.

use serde::{Deserialize, Serialize};

use crate::cards::Style;

/// Game difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 9-card board, every card drawn with solid style.
    Easy,
    /// 12-card board, full style domain.
    Standard,
}

impl Difficulty {
    /// Number of cards on the board at this difficulty.
    #[must_use]
    pub const fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 9,
            Difficulty::Standard => 12,
        }
    }

    /// Style values card generation may draw from.
    ///
    /// This is the only difficulty-dependent generation rule: Easy collapses
    /// the style domain to solid.
    #[must_use]
    pub const fn style_domain(self) -> &'static [Style] {
        match self {
            Difficulty::Easy => &[Style::Solid],
            Difficulty::Standard => &Style::ALL,
        }
    }

    /// Number of distinct attribute combinations available at this difficulty.
    #[must_use]
    pub const fn combinations(self) -> usize {
        // shape * color * count = 27, times the style domain
        self.style_domain().len() * 27
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_sizes() {
        assert_eq!(Difficulty::Easy.board_size(), 9);
        assert_eq!(Difficulty::Standard.board_size(), 12);
    }

    #[test]
    fn test_style_domains() {
        assert_eq!(Difficulty::Easy.style_domain(), &[Style::Solid]);
        assert_eq!(Difficulty::Standard.style_domain().len(), 3);
    }

    #[test]
    fn test_combinations_exceed_board_size() {
        for difficulty in [Difficulty::Easy, Difficulty::Standard] {
            assert!(difficulty.combinations() > difficulty.board_size());
        }
        assert_eq!(Difficulty::Easy.combinations(), 27);
        assert_eq!(Difficulty::Standard.combinations(), 81);
    }
}
