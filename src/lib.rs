//! # dominion-client
//!
//! Client-side turn and selection engine for a Dominion game client.
//!
//! The game server is authoritative. This crate holds the small amount of
//! real logic the client needs between server snapshots: classifying cards,
//! deriving the turn phase, curating a custom card set, and deciding whether
//! a buy or play gesture should produce an intent.
//!
//! ## Design Principles
//!
//! 1. **Snapshots Replace, Never Merge**: Each snapshot from the server
//!    replaces the held one wholesale.
//!
//! 2. **One Owner**: All mutable client state lives in `Session` and changes
//!    only through `on_snapshot` or a gesture method.
//!
//! 3. **Decline, Don't Fail**: Illegal gestures and unready state are
//!    silently ignored. Only decoding, configuration, and player-count
//!    choice return errors.
//!
//! 4. **Identity by Name**: Piles and hand cards are matched by card name,
//!    so selections survive snapshot replacement.
//!
//! ## Modules
//!
//! - `core`: players, snapshots, intents, configuration, errors
//! - `cards`: categories, card values, classification, supply piles
//! - `selection`: setup draft cycler, selection state, hover tracking
//! - `turn`: phase derivation and the buy/play guard
//! - `session`: snapshot synchronization and gesture entry points

pub mod cards;
pub mod core;
pub mod selection;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ActionSet, ClientConfig, ClientError, GameMeta, GameSnapshot, Intent, Player, PlayerId,
    PossibleAction,
};

pub use crate::cards::{
    filter_piles_by_categories, has_category, is_action, pile_contains_category, sort_by_price,
    Card, CardCategory, CategorySet, PileGroups, SupplyPile,
};

pub use crate::selection::{HoverTracker, Membership, SelectionCycler, SelectionState};

pub use crate::turn::{resolve_phase, ActionGuard, TurnPhase};

pub use crate::session::{InFlightIntent, Session, SnapshotOutcome};
