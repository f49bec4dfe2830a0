//! Core client types: players, snapshots, intents, configuration, errors.
//!
//! Everything here is plain data. Behavior lives in `selection`, `turn`,
//! and `session`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod snapshot;

pub use action::{ActionSet, Intent, PossibleAction};
pub use config::{ClientConfig, DEFAULT_MAX_INCLUDED_CARDS};
pub use error::ClientError;
pub use player::{Player, PlayerId};
pub use snapshot::{GameMeta, GameSnapshot};
