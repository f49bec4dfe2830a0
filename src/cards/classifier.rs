//! Category predicates over cards and card sequences.
//!
//! Free-function forms of the `Card` methods, usable directly as filter
//! predicates.

use super::category::CardCategory;
use super::definition::Card;

/// Check if `card` belongs to `category`.
#[must_use]
pub fn has_category(card: &Card, category: &CardCategory) -> bool {
    card.categories.contains(category)
}

/// Check if `card` is an Action card.
#[must_use]
pub fn is_action(card: &Card) -> bool {
    has_category(card, &CardCategory::Action)
}

/// Check if at least one card in `cards` belongs to `category`.
#[must_use]
pub fn pile_contains_category<'a, I>(cards: I, category: &CardCategory) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().any(|card| has_category(card, category))
}
