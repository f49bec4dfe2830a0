//! Outbound intents and the server's list of possible actions.
//!
//! An `Intent` is what the client asks the game service to do. The client
//! never applies an intent locally; it waits for the next snapshot.
//!
//! `ActionSet` is the snapshot's `possibleActions` list, held as a hash set
//! keyed by action name.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A request for the external game service.
///
/// ## Example
///
/// ```
/// use dominion_client::core::Intent;
///
/// let buy = Intent::buy("Silver");
/// assert_eq!(buy.card_name(), Some("Silver"));
/// assert_eq!(Intent::EndTurn.card_name(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum Intent {
    /// Start a game with the curated card selection.
    #[serde(rename_all = "camelCase")]
    StartGame {
        player_count: u8,
        included_card_names: Vec<String>,
        excluded_card_names: Vec<String>,
    },
    ResetGame,
    EndTurn,
    #[serde(rename_all = "camelCase")]
    BuyCard { card_name: String },
    #[serde(rename_all = "camelCase")]
    PlayCard { card_name: String },
}

impl Intent {
    /// Create a buy intent.
    #[must_use]
    pub fn buy(card_name: impl Into<String>) -> Self {
        Intent::BuyCard {
            card_name: card_name.into(),
        }
    }

    /// Create a play intent.
    #[must_use]
    pub fn play(card_name: impl Into<String>) -> Self {
        Intent::PlayCard {
            card_name: card_name.into(),
        }
    }

    /// The card this intent targets, for buy and play intents.
    #[must_use]
    pub fn card_name(&self) -> Option<&str> {
        match self {
            Intent::BuyCard { card_name } | Intent::PlayCard { card_name } => Some(card_name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::StartGame {
                player_count,
                included_card_names,
                excluded_card_names,
            } => write!(
                f,
                "start-game({} players, {} included, {} excluded)",
                player_count,
                included_card_names.len(),
                excluded_card_names.len()
            ),
            Intent::ResetGame => write!(f, "reset-game"),
            Intent::EndTurn => write!(f, "end-turn"),
            Intent::BuyCard { card_name } => write!(f, "buy-card({})", card_name),
            Intent::PlayCard { card_name } => write!(f, "play-card({})", card_name),
        }
    }
}

/// One entry of the snapshot's `possibleActions` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleAction {
    pub action_name: String,
}

/// The actions the server currently allows, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PossibleAction>", into = "Vec<PossibleAction>")]
pub struct ActionSet {
    names: FxHashSet<String>,
}

impl ActionSet {
    /// Create an empty action set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Check if the named action is available.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ActionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ActionSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<PossibleAction>> for ActionSet {
    fn from(actions: Vec<PossibleAction>) -> Self {
        actions.into_iter().map(|a| a.action_name).collect()
    }
}

impl From<ActionSet> for Vec<PossibleAction> {
    fn from(set: ActionSet) -> Self {
        let mut names: Vec<String> = set.names.into_iter().collect();
        names.sort();
        names
            .into_iter()
            .map(|action_name| PossibleAction { action_name })
            .collect()
    }
}
