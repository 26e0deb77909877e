//! Cards: attribute domains, card identity, and random generation.

pub mod attributes;
pub mod card;
pub mod factory;

pub use attributes::{AttributeSet, Color, ParseAttributeSetError, Shape, Style, COUNTS};
pub use card::Card;
pub use factory::CardFactory;
