//! Authoritative game snapshots.
//!
//! ## GameMeta
//!
//! Turn-level metadata: whose turn it is, the supply piles, turn counter,
//! and the card pool available for custom setup.
//!
//! ## GameSnapshot
//!
//! Complete, point-in-time game state from the game service:
//! - Game metadata
//! - Every player's counters and cards
//! - Actions the server currently allows
//! - Game-over flag
//!
//! Snapshots are read-only to the client. Each delivery replaces the
//! previous snapshot wholesale; nothing is merged.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionSet;
use super::error::ClientError;
use super::player::{Player, PlayerId};
use crate::cards::{Card, SupplyPile};

/// Turn-level game metadata.
///
/// Uses `im` persistent vectors so holding and cloning snapshots is cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMeta {
    /// Index of the player whose turn it is.
    pub current_player_id: PlayerId,

    /// One pile per card type in the game.
    #[serde(default)]
    pub supply_piles: Vector<SupplyPile>,

    /// Turn counter.
    #[serde(default)]
    pub turn_played: u32,

    /// Cards offered on the setup screen.
    #[serde(default)]
    pub cards_available: Vector<Card>,
}

impl GameMeta {
    /// Create metadata with no piles and no setup pool.
    #[must_use]
    pub fn new(current_player_id: PlayerId) -> Self {
        Self {
            current_player_id,
            supply_piles: Vector::new(),
            turn_played: 0,
            cards_available: Vector::new(),
        }
    }

    /// Find a supply pile by card name.
    #[must_use]
    pub fn supply_pile(&self, name: &str) -> Option<&SupplyPile> {
        self.supply_piles.iter().find(|p| p.key() == name)
    }
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_meta: GameMeta,

    #[serde(default)]
    pub players: Vector<Player>,

    #[serde(default)]
    pub possible_actions: ActionSet,

    #[serde(default, alias = "theGameOver")]
    pub game_over: bool,
}

impl GameSnapshot {
    /// Create a snapshot with no players.
    #[must_use]
    pub fn new(current_player_id: PlayerId) -> Self {
        Self {
            game_meta: GameMeta::new(current_player_id),
            players: Vector::new(),
            possible_actions: ActionSet::new(),
            game_over: false,
        }
    }

    /// Decode a snapshot from the game service's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push_back(player);
        self
    }

    /// Add a supply pile (builder pattern).
    #[must_use]
    pub fn with_supply_pile(mut self, pile: SupplyPile) -> Self {
        self.game_meta.supply_piles.push_back(pile);
        self
    }

    /// Add a card to the setup pool (builder pattern).
    #[must_use]
    pub fn with_available_card(mut self, card: Card) -> Self {
        self.game_meta.cards_available.push_back(card);
        self
    }

    /// Allow a named action (builder pattern).
    #[must_use]
    pub fn with_possible_action(mut self, name: impl Into<String>) -> Self {
        self.possible_actions.insert(name);
        self
    }

    /// Set the turn counter (builder pattern).
    #[must_use]
    pub fn with_turn_played(mut self, turn: u32) -> Self {
        self.game_meta.turn_played = turn;
        self
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.game_meta.current_player_id
    }

    /// The player whose turn it is.
    ///
    /// `None` if the current player id does not index into the player list.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.game_meta.current_player_id)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Check if the server currently allows the named action.
    #[must_use]
    pub fn is_action_available(&self, name: &str) -> bool {
        self.possible_actions.contains(name)
    }
}
