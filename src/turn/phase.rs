//! Turn phase derivation.
//!
//! The phase is never toggled by the player. It is derived from the
//! server's action count and the current hand whenever a snapshot arrives.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// The client's belief about what the current player may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Action cards may be played.
    #[default]
    Action,
    /// Only buying is possible.
    Buy,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Action => write!(f, "Action"),
            TurnPhase::Buy => write!(f, "Buy"),
        }
    }
}

/// Derive the phase for `player`.
///
/// Buy when no actions remain or the hand holds no Action card;
/// Action otherwise.
///
/// ```
/// use dominion_client::cards::Card;
/// use dominion_client::core::{Player, PlayerId};
/// use dominion_client::turn::{resolve_phase, TurnPhase};
///
/// let player = Player::new(PlayerId::new(0))
///     .with_actions(1)
///     .with_hand(vec![Card::action("Village", 3)]);
/// assert_eq!(resolve_phase(&player), TurnPhase::Action);
/// ```
#[must_use]
pub fn resolve_phase(player: &Player) -> TurnPhase {
    if player.actions == 0 || !player.has_action_in_hand() {
        TurnPhase::Buy
    } else {
        TurnPhase::Action
    }
}
