//! Card values as delivered by the game service.
//!
//! A `Card` is immutable data: the name identifies the card type
//! ("Village", "Copper"), and several copies with the same name are
//! indistinguishable to the client.

use serde::{Deserialize, Serialize};

use super::category::{CardCategory, CategorySet};

/// A single Dominion card.
///
/// ## Example
///
/// ```
/// use dominion_client::cards::{Card, CardCategory};
///
/// let harem = Card::new("Harem", 6)
///     .with_points(2)
///     .with_category(CardCategory::Treasure)
///     .with_category(CardCategory::Victory);
///
/// assert!(harem.has_category(&CardCategory::Victory));
/// assert!(!harem.is_action());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name. Unique per card type.
    pub name: String,

    /// Cost in money.
    pub price: i64,

    /// Victory points.
    #[serde(default)]
    pub points: i64,

    /// Categories (Action, Treasure, Victory, ...).
    #[serde(rename = "cardCategory", alias = "categories", default)]
    pub categories: CategorySet,
}

impl Card {
    /// Create a card with no categories and no points.
    #[must_use]
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            points: 0,
            categories: CategorySet::new(),
        }
    }

    /// Create an Action card.
    #[must_use]
    pub fn action(name: impl Into<String>, price: i64) -> Self {
        Self::new(name, price).with_category(CardCategory::Action)
    }

    /// Create a Treasure card.
    #[must_use]
    pub fn treasure(name: impl Into<String>, price: i64) -> Self {
        Self::new(name, price).with_category(CardCategory::Treasure)
    }

    /// Create a Victory card worth `points`.
    #[must_use]
    pub fn victory(name: impl Into<String>, price: i64, points: i64) -> Self {
        Self::new(name, price)
            .with_points(points)
            .with_category(CardCategory::Victory)
    }

    /// Set victory points (builder pattern).
    #[must_use]
    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Add a category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: CardCategory) -> Self {
        self.categories.insert(category);
        self
    }

    /// Check if this card has the given category.
    #[must_use]
    pub fn has_category(&self, category: &CardCategory) -> bool {
        self.categories.contains(category)
    }

    /// Check if this card is an Action card.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.has_category(&CardCategory::Action)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builders() {
        let village = Card::action("Village", 3);
        assert!(village.is_action());
        assert_eq!(village.points, 0);

        let estate = Card::victory("Estate", 2, 1);
        assert!(estate.has_category(&CardCategory::Victory));
        assert_eq!(estate.points, 1);

        let copper = Card::treasure("Copper", 0);
        assert!(copper.has_category(&CardCategory::Treasure));
        assert!(!copper.is_action());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(format!("{}", Card::action("Smithy", 4)), "Smithy (4)");
    }

    #[test]
    fn test_card_wire_format() {
        let json =
            r#"{"name": "Witch", "price": 5, "points": 0, "cardCategory": ["Action", "Attack"]}"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.name, "Witch");
        assert!(card.is_action());
        assert!(card.has_category(&CardCategory::Attack));

        let out = serde_json::to_value(&card).unwrap();
        assert_eq!(out["cardCategory"], serde_json::json!(["Action", "Attack"]));
    }

    #[test]
    fn test_card_accepts_categories_alias() {
        let json = r#"{"name": "Gold", "price": 6, "categories": ["Treasure"]}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(card.has_category(&CardCategory::Treasure));
        assert_eq!(card.points, 0);
    }
}
