//! Player identification and per-player snapshot data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The server numbers players from 0 and
//! `GameMeta::current_player_id` indexes straight into the player list.
//!
//! ## Player
//!
//! One player's view as delivered by the game service: counters for the
//! current turn plus the card sequences (hand, deck, discard, all cards).

use serde::{Deserialize, Serialize};

use crate::cards::{pile_contains_category, Card, CardCategory};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player as seen in a game snapshot.
///
/// Only `id`, `actions`, `buys`, `money`, `money_available` and `hand` drive
/// client behavior; the remaining fields are carried for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Position in the player list.
    pub id: PlayerId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Actions left this turn.
    pub actions: u32,

    /// Buys left this turn.
    pub buys: u32,

    /// Total money in hand.
    pub money: i64,

    /// Money actually spendable this turn (never more than `money`).
    pub money_available: i64,

    /// Cards in hand, in server order.
    #[serde(default)]
    pub hand: Vec<Card>,

    #[serde(default)]
    pub deck: Vec<Card>,

    #[serde(default)]
    pub discard: Vec<Card>,

    #[serde(default)]
    pub all_cards: Vec<Card>,

    /// Card the server is waiting on this player to resolve, if any.
    #[serde(default)]
    pub card_to_play: Option<Card>,

    #[serde(default)]
    pub number_of_gardens: u32,
}

impl Player {
    /// Create a player with empty card sequences.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            actions: 0,
            buys: 0,
            money: 0,
            money_available: 0,
            hand: Vec::new(),
            deck: Vec::new(),
            discard: Vec::new(),
            all_cards: Vec::new(),
            card_to_play: None,
            number_of_gardens: 0,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the remaining actions.
    #[must_use]
    pub fn with_actions(mut self, actions: u32) -> Self {
        self.actions = actions;
        self
    }

    /// Set the remaining buys.
    #[must_use]
    pub fn with_buys(mut self, buys: u32) -> Self {
        self.buys = buys;
        self
    }

    /// Set both total and spendable money.
    #[must_use]
    pub fn with_money(mut self, money: i64) -> Self {
        self.money = money;
        self.money_available = money;
        self
    }

    /// Set only the spendable money.
    #[must_use]
    pub fn with_money_available(mut self, money_available: i64) -> Self {
        self.money_available = money_available;
        self
    }

    /// Replace the hand.
    #[must_use]
    pub fn with_hand(mut self, hand: Vec<Card>) -> Self {
        self.hand = hand;
        self
    }

    /// Check if the hand holds at least one Action card.
    #[must_use]
    pub fn has_action_in_hand(&self) -> bool {
        pile_contains_category(&self.hand, &CardCategory::Action)
    }

    /// Find a card in hand by name.
    #[must_use]
    pub fn hand_card(&self, name: &str) -> Option<&Card> {
        self.hand.iter().find(|c| c.name == name)
    }
}
