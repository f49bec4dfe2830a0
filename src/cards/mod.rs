//! Card system: categories, card values, classification, supply piles.
//!
//! ## Key Types
//!
//! - `CardCategory`: Action, Treasure, Victory, ... (plus unknown names)
//! - `CategorySet`: deduplicated category set on a card
//! - `Card`: immutable card value keyed by name
//! - `SupplyPile`: a purchasable stack of one card type
//! - `PileGroups`: treasure / victory / other display groupings

pub mod category;
pub mod classifier;
pub mod definition;
pub mod pile;

pub use category::{CardCategory, CategorySet};
pub use classifier::{has_category, is_action, pile_contains_category};
pub use definition::Card;
pub use pile::{filter_piles_by_categories, sort_by_price, PileGroups, SupplyPile};
