//! Set-judging integration tests.
//!
//! The dimension rule is checked both against hand-picked triples and,
//! via proptest, against an independent restatement of the rule over the
//! whole attribute space.

use proptest::prelude::*;

use set_core::{is_set, AttributeSet, Card, Color, Shape, Style, COUNTS};

fn card(style: Style, shape: Shape, color: Color, count: u8) -> Card {
    Card::new(AttributeSet::new(style, shape, color, count))
}

fn every_card() -> Vec<Card> {
    let mut cards = Vec::with_capacity(81);
    for style in Style::ALL {
        for shape in Shape::ALL {
            for color in Color::ALL {
                for count in COUNTS {
                    cards.push(card(style, shape, color, count));
                }
            }
        }
    }
    cards
}

#[test]
fn test_trivial_all_equal_triple() {
    let c = card(Style::Solid, Shape::Diamond, Color::Green, 1);
    assert!(is_set(&[c, c, c]));
}

#[test]
fn test_all_distinct_triple() {
    assert!(is_set(&[
        card(Style::Solid, Shape::Diamond, Color::Green, 1),
        card(Style::Outline, Shape::Oval, Color::Purple, 2),
        card(Style::Striped, Shape::Squiggle, Color::Red, 3),
    ]));
}

#[test]
fn test_two_matching_in_one_dimension_fails() {
    assert!(!is_set(&[
        card(Style::Solid, Shape::Diamond, Color::Green, 1),
        card(Style::Solid, Shape::Oval, Color::Green, 2),
        card(Style::Outline, Shape::Squiggle, Color::Red, 3),
    ]));
}

#[test]
fn test_order_does_not_matter() {
    let a = card(Style::Striped, Shape::Oval, Color::Green, 2);
    let b = card(Style::Striped, Shape::Diamond, Color::Purple, 1);
    let c = card(Style::Striped, Shape::Squiggle, Color::Red, 3);

    assert!(is_set(&[a, b, c]));
    assert!(is_set(&[c, a, b]));
    assert!(is_set(&[b, c, a]));
}

/// Every pair of distinct cards has exactly one completing third card.
/// This is the combinatorial heart of the game; it follows from each
/// dimension independently forcing the third value.
#[test]
fn test_every_pair_has_unique_completion() {
    let all = every_card();
    let a = card(Style::Solid, Shape::Diamond, Color::Green, 1);
    for &b in &all {
        if a == b {
            continue;
        }
        let completions = all.iter().filter(|&&c| is_set(&[a, b, c])).count();
        assert_eq!(completions, 1, "pair ({a}, {b}) had {completions} completions");
    }
}

fn attribute_strategy() -> impl Strategy<Value = AttributeSet> {
    (0..3usize, 0..3usize, 0..3usize, 0..3usize).prop_map(|(s, sh, c, n)| {
        AttributeSet::new(Style::ALL[s], Shape::ALL[sh], Color::ALL[c], COUNTS[n])
    })
}

/// Independent restatement of the rule, kept deliberately separate from
/// the implementation under test.
fn dimension_passes<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

proptest! {
    /// `is_set` agrees with the per-dimension uniform-or-distinct rule
    /// for arbitrary triples, duplicates included.
    #[test]
    fn prop_is_set_matches_dimension_rule(
        a in attribute_strategy(),
        b in attribute_strategy(),
        c in attribute_strategy(),
    ) {
        let expected = dimension_passes(a.style, b.style, c.style)
            && dimension_passes(a.shape, b.shape, c.shape)
            && dimension_passes(a.color, b.color, c.color)
            && dimension_passes(a.count, b.count, c.count);

        prop_assert_eq!(
            is_set(&[Card::new(a), Card::new(b), Card::new(c)]),
            expected
        );
    }

    /// Any two distinct cards are completed by exactly one third card.
    #[test]
    fn prop_unique_completion(a in attribute_strategy(), b in attribute_strategy()) {
        prop_assume!(a != b);
        let completions = every_card()
            .iter()
            .filter(|&&c| is_set(&[Card::new(a), Card::new(b), c]))
            .count();
        prop_assert_eq!(completions, 1);
    }
}
