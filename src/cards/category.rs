//! Card categories and the per-card category set.
//!
//! The server sends categories as a list of strings, possibly with
//! duplicates. `CategorySet` collapses that list into a true set so that
//! membership tests are exact.
//!
//! ## Known Categories
//!
//! - `Action`: playable during the Action phase
//! - `Treasure`: produces money
//! - `Victory`: worth points at game end
//! - `Curse`, `Attack`, `Reaction`: carried for display and filtering
//!
//! Anything else is kept verbatim as `Other`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A card category.
///
/// Serialized as its plain name (`"Action"`, `"Treasure"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardCategory {
    Action,
    Treasure,
    Victory,
    Curse,
    Attack,
    Reaction,
    /// A category this client has no special handling for.
    Other(String),
}

impl CardCategory {
    /// The wire name of this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardCategory::Action => "Action",
            CardCategory::Treasure => "Treasure",
            CardCategory::Victory => "Victory",
            CardCategory::Curse => "Curse",
            CardCategory::Attack => "Attack",
            CardCategory::Reaction => "Reaction",
            CardCategory::Other(name) => name,
        }
    }
}

impl From<&str> for CardCategory {
    fn from(name: &str) -> Self {
        match name {
            "Action" => CardCategory::Action,
            "Treasure" => CardCategory::Treasure,
            "Victory" => CardCategory::Victory,
            "Curse" => CardCategory::Curse,
            "Attack" => CardCategory::Attack,
            "Reaction" => CardCategory::Reaction,
            other => CardCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for CardCategory {
    fn from(name: String) -> Self {
        match CardCategory::from(name.as_str()) {
            CardCategory::Other(_) => CardCategory::Other(name),
            known => known,
        }
    }
}

impl From<CardCategory> for String {
    fn from(category: CardCategory) -> Self {
        match category {
            CardCategory::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of categories on one card.
///
/// Kept sorted and deduplicated, so equality is set equality.
/// SmallVec holds the usual one or two categories without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CardCategory>", into = "Vec<CardCategory>")]
pub struct CategorySet {
    categories: SmallVec<[CardCategory; 2]>,
}

impl CategorySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. Returns false if it was already present.
    pub fn insert(&mut self, category: CardCategory) -> bool {
        match self.categories.binary_search(&category) {
            Ok(_) => false,
            Err(pos) => {
                self.categories.insert(pos, category);
                true
            }
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, category: &CardCategory) -> bool {
        self.categories.binary_search(category).is_ok()
    }

    /// Check if any of the given categories is present.
    #[must_use]
    pub fn contains_any(&self, categories: &[CardCategory]) -> bool {
        categories.iter().any(|c| self.contains(c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardCategory> {
        self.categories.iter()
    }
}

impl FromIterator<CardCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CardCategory>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<CardCategory>> for CategorySet {
    fn from(categories: Vec<CardCategory>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<CardCategory> {
    fn from(set: CategorySet) -> Self {
        set.categories.into_vec()
    }
}
