//! The attribute space for Set cards.
//!
//! Every card is identified by four attributes, each drawn from a fixed
//! domain of three values:
//!
//! - `Style`: solid, outline, striped
//! - `Shape`: diamond, oval, squiggle
//! - `Color`: green, purple, red
//! - count: 1, 2, or 3 visual units
//!
//! The structured [`AttributeSet`] is the source of truth everywhere inside
//! the engine. The dash-separated string form (`solid-diamond-green-1`)
//! exists only for the display boundary, where hosts map cards to and from
//! element identifiers and image names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fill style of a card's shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Solid,
    Outline,
    Striped,
}

impl Style {
    /// The full style domain.
    pub const ALL: [Style; 3] = [Style::Solid, Style::Outline, Style::Striped];

    /// Boundary string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::Outline => "outline",
            Style::Striped => "striped",
        }
    }
}

/// Shape drawn on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

impl Shape {
    /// The full shape domain.
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Oval, Shape::Squiggle];

    /// Boundary string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Oval => "oval",
            Shape::Squiggle => "squiggle",
        }
    }
}

/// Color of a card's shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Purple,
    Red,
}

impl Color {
    /// The full color domain.
    pub const ALL: [Color; 3] = [Color::Green, Color::Purple, Color::Red];

    /// Boundary string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// The count domain: how many shape repetitions a card renders with.
pub const COUNTS: [u8; 3] = [1, 2, 3];

/// The four attributes identifying a card. Immutable once drawn.
///
/// Two cards are identical iff all four attributes match; there is no
/// surrogate key anywhere in the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    pub style: Style,
    pub shape: Shape,
    pub color: Color,
    /// Render multiplicity, 1..=3. Carried through as data; how it is
    /// drawn is the display's concern.
    pub count: u8,
}

impl AttributeSet {
    /// Create an attribute set. `count` must be 1..=3.
    #[must_use]
    pub fn new(style: Style, shape: Shape, color: Color, count: u8) -> Self {
        assert!(COUNTS.contains(&count), "count must be 1..=3, got {count}");
        Self {
            style,
            shape,
            color,
            count,
        }
    }
}

impl fmt::Display for AttributeSet {
    /// Boundary form: `style-shape-color-count`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.style.as_str(),
            self.shape.as_str(),
            self.color.as_str(),
            self.count
        )
    }
}

/// Error parsing an [`AttributeSet`] from its boundary string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAttributeSetError {
    input: String,
}

impl fmt::Display for ParseAttributeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a card attribute string: {:?}", self.input)
    }
}

impl std::error::Error for ParseAttributeSetError {}

impl FromStr for AttributeSet {
    type Err = ParseAttributeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAttributeSetError {
            input: s.to_string(),
        };

        let mut parts = s.split('-');
        let style = match parts.next() {
            Some("solid") => Style::Solid,
            Some("outline") => Style::Outline,
            Some("striped") => Style::Striped,
            _ => return Err(err()),
        };
        let shape = match parts.next() {
            Some("diamond") => Shape::Diamond,
            Some("oval") => Shape::Oval,
            Some("squiggle") => Shape::Squiggle,
            _ => return Err(err()),
        };
        let color = match parts.next() {
            Some("green") => Color::Green,
            Some("purple") => Color::Purple,
            Some("red") => Color::Red,
            _ => return Err(err()),
        };
        let count = match parts.next() {
            Some("1") => 1,
            Some("2") => 2,
            Some("3") => 3,
            _ => return Err(err()),
        };
        if parts.next().is_some() {
            return Err(err());
        }

        Ok(AttributeSet {
            style,
            shape,
            color,
            count,
        })
    }
}
