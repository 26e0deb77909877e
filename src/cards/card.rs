//! Cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AttributeSet;

/// A card on the board.
///
/// A card's identity is exactly its attribute tuple. The board owns its
/// cards exclusively while they are displayed; a card replaced after a
/// valid set simply ceases to exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(AttributeSet);

impl Card {
    /// Create a card from its attributes.
    #[must_use]
    pub const fn new(attributes: AttributeSet) -> Self {
        Self(attributes)
    }

    /// The card's attribute tuple.
    #[must_use]
    pub const fn attributes(self) -> AttributeSet {
        self.0
    }

    /// Render multiplicity: how many visual units the display repeats.
    #[must_use]
    pub const fn count(self) -> u8 {
        self.0.count
    }
}

impl From<AttributeSet> for Card {
    fn from(attributes: AttributeSet) -> Self {
        Self(attributes)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Shape, Style};

    #[test]
    fn test_identity_is_attribute_tuple() {
        let attrs = AttributeSet::new(Style::Outline, Shape::Oval, Color::Purple, 2);
        let a = Card::new(attrs);
        let b = Card::from(attrs);
        assert_eq!(a, b);
        assert_eq!(a.attributes(), attrs);
        assert_eq!(a.count(), 2);
    }

    #[test]
    fn test_display_delegates() {
        let card = Card::new(AttributeSet::new(
            Style::Solid,
            Shape::Squiggle,
            Color::Red,
            3,
        ));
        assert_eq!(card.to_string(), "solid-squiggle-red-3");
    }
}
