//! Set judging.
//!
//! Three cards form a set when, for each of the four attribute dimensions
//! independently, the three values are either all equal or pairwise
//! distinct. A dimension where exactly two values match disqualifies the
//! triple. Pure and O(1): four dimension checks, nothing else.

use crate::cards::Card;

/// Number of cards evaluated together.
pub const SET_SIZE: usize = 3;

/// Judge whether three cards form a valid set.
#[must_use]
pub fn is_set(cards: &[Card; SET_SIZE]) -> bool {
    let [a, b, c] = cards.map(|card| card.attributes());

    uniform_or_distinct(a.style, b.style, c.style)
        && uniform_or_distinct(a.shape, b.shape, c.shape)
        && uniform_or_distinct(a.color, b.color, c.color)
        && uniform_or_distinct(a.count, b.count, c.count)
}

/// One dimension passes iff its three values are all equal or all distinct.
fn uniform_or_distinct<T: PartialEq>(a: T, b: T, c: T) -> bool {
    let all_equal = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_equal || all_distinct
}
