//! Supply piles: filtering, price ordering, and display groupings.
//!
//! Filtering uses "any-of" matching: a pile matches when its card has at
//! least one of the requested categories. Exclude mode inverts that, keeping
//! only piles whose card has none of them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::category::CardCategory;
use super::definition::Card;

/// One stack of a card type available for purchase.
///
/// Piles are identified by card name; two piles from different snapshots
/// with the same card name are the same pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyPile {
    /// The card this pile supplies.
    #[serde(alias = "dominionCard")]
    pub card: Card,

    /// Copies left in the pile.
    pub remaining_count: u32,
}

impl SupplyPile {
    /// Create a new supply pile.
    #[must_use]
    pub fn new(card: Card, remaining_count: u32) -> Self {
        Self { card, remaining_count }
    }

    /// The pile key (its card name).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.card.name
    }

    /// Check if no copies remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining_count == 0
    }
}

/// Filter piles by category membership.
///
/// With `exclude_matched == false`, keeps piles whose card has at least one
/// of `categories`. With `exclude_matched == true`, keeps piles whose card
/// has none of them. Input order is preserved.
///
/// ```
/// use dominion_client::cards::{filter_piles_by_categories, Card, CardCategory, SupplyPile};
///
/// let piles = vec![
///     SupplyPile::new(Card::treasure("Copper", 0), 46),
///     SupplyPile::new(Card::victory("Estate", 2, 1), 8),
///     SupplyPile::new(Card::action("Village", 3), 10),
/// ];
///
/// let kingdom = filter_piles_by_categories(
///     &piles,
///     &[CardCategory::Treasure, CardCategory::Victory],
///     true,
/// );
/// assert_eq!(kingdom.len(), 1);
/// assert_eq!(kingdom[0].key(), "Village");
/// ```
pub fn filter_piles_by_categories<'a, I>(
    piles: I,
    categories: &[CardCategory],
    exclude_matched: bool,
) -> Vec<&'a SupplyPile>
where
    I: IntoIterator<Item = &'a SupplyPile>,
{
    piles
        .into_iter()
        .filter(|pile| pile.card.categories.contains_any(categories) != exclude_matched)
        .collect()
}

/// Three-way comparison of two cards by price.
///
/// Equal prices compare `Equal`, so a stable sort keeps their prior order.
#[must_use]
pub fn sort_by_price(a: &Card, b: &Card) -> Ordering {
    a.price.cmp(&b.price)
}

/// Supply piles split into the three display groups.
///
/// A pile whose card is both Treasure and Victory appears in both of those
/// groups. Each group is sorted ascending by price.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PileGroups<'a> {
    pub treasure: Vec<&'a SupplyPile>,
    pub victory: Vec<&'a SupplyPile>,
    /// Everything that is neither Treasure nor Victory (the kingdom cards).
    pub other: Vec<&'a SupplyPile>,
}

impl<'a> PileGroups<'a> {
    /// Group and sort the given piles.
    pub fn from_piles<I>(piles: I) -> Self
    where
        I: IntoIterator<Item = &'a SupplyPile>,
    {
        let piles: Vec<&'a SupplyPile> = piles.into_iter().collect();

        let sorted = |mut group: Vec<&'a SupplyPile>| {
            group.sort_by(|a, b| sort_by_price(&a.card, &b.card));
            group
        };

        Self {
            treasure: sorted(filter_piles_by_categories(
                piles.iter().copied(),
                &[CardCategory::Treasure],
                false,
            )),
            victory: sorted(filter_piles_by_categories(
                piles.iter().copied(),
                &[CardCategory::Victory],
                false,
            )),
            other: sorted(filter_piles_by_categories(
                piles.iter().copied(),
                &[CardCategory::Treasure, CardCategory::Victory],
                true,
            )),
        }
    }
}
