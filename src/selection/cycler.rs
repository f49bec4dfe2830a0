//! Three-state card selection for custom game setup.
//!
//! Each card name cycles neutral -> included -> excluded -> neutral.
//! Inclusions are capped; toggling a neutral card once the cap is reached
//! sends it straight to excluded.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_MAX_INCLUDED_CARDS;

/// A card name's place in the setup draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Membership {
    Neutral,
    Included,
    Excluded,
}

/// The included/excluded card-name collections of a setup draft.
///
/// Both collections keep insertion order so the start-game intent lists
/// cards in the order the player picked them. A name is never in both.
///
/// ## Example
///
/// ```
/// use dominion_client::selection::{Membership, SelectionCycler};
///
/// let mut cycler = SelectionCycler::new();
///
/// cycler.toggle("Witch");
/// assert_eq!(cycler.membership("Witch"), Membership::Included);
///
/// cycler.toggle("Witch");
/// assert_eq!(cycler.membership("Witch"), Membership::Excluded);
///
/// cycler.toggle("Witch");
/// assert_eq!(cycler.membership("Witch"), Membership::Neutral);
/// ```
///
/// A draft is only ever built by toggling; there is no `Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionCycler {
    included: Vec<String>,
    excluded: Vec<String>,
    max_included: usize,
}

impl Default for SelectionCycler {
    fn default() -> Self {
        Self::with_cap(DEFAULT_MAX_INCLUDED_CARDS)
    }
}

impl SelectionCycler {
    /// Create an empty cycler with the standard cap of 10.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cycler with a custom inclusion cap.
    ///
    /// Caps above `DEFAULT_MAX_INCLUDED_CARDS` are clamped to it.
    #[must_use]
    pub fn with_cap(max_included: usize) -> Self {
        Self {
            included: Vec::new(),
            excluded: Vec::new(),
            max_included: max_included.min(DEFAULT_MAX_INCLUDED_CARDS),
        }
    }

    /// Advance `card_name` one step through the cycle.
    ///
    /// - excluded -> neutral
    /// - included -> excluded
    /// - neutral -> included, or excluded if the cap is already reached
    ///
    /// Returns the new membership.
    pub fn toggle(&mut self, card_name: &str) -> Membership {
        if let Some(pos) = self.excluded.iter().position(|n| n == card_name) {
            self.excluded.remove(pos);
            Membership::Neutral
        } else if let Some(pos) = self.included.iter().position(|n| n == card_name) {
            let name = self.included.remove(pos);
            self.excluded.push(name);
            Membership::Excluded
        } else if self.included.len() < self.max_included {
            self.included.push(card_name.to_string());
            Membership::Included
        } else {
            self.excluded.push(card_name.to_string());
            Membership::Excluded
        }
    }

    /// Return every card to neutral.
    pub fn reset(&mut self) {
        self.included.clear();
        self.excluded.clear();
    }

    /// Current membership of `card_name`.
    #[must_use]
    pub fn membership(&self, card_name: &str) -> Membership {
        if self.included.iter().any(|n| n == card_name) {
            Membership::Included
        } else if self.excluded.iter().any(|n| n == card_name) {
            Membership::Excluded
        } else {
            Membership::Neutral
        }
    }

    /// Included names, in the order they were picked.
    #[must_use]
    pub fn included(&self) -> &[String] {
        &self.included
    }

    /// Excluded names, in the order they were excluded.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// The inclusion cap.
    #[must_use]
    pub fn max_included(&self) -> usize {
        self.max_included
    }

    /// Check if no more cards can be included.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.included.len() >= self.max_included
    }

    /// Check if both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }
}
