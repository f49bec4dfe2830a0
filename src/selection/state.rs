//! Transient selection state owned by a client session.

use serde::Serialize;

use super::cycler::SelectionCycler;
use crate::turn::TurnPhase;

/// Everything the client holds locally between snapshots.
///
/// Gesture targets are stored by card name, not by reference, so a
/// selection survives a snapshot that re-sends the same pile or card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Custom setup draft.
    pub cycler: SelectionCycler,

    /// Card name of the selected supply pile.
    pub selected_supply_pile: Option<String>,

    /// Card name of the selected hand card.
    pub selected_hand_card: Option<String>,

    /// Derived turn phase for the current player.
    pub phase: TurnPhase,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(SelectionCycler::default())
    }
}

impl SelectionState {
    /// Create an empty selection around the given cycler.
    #[must_use]
    pub fn new(cycler: SelectionCycler) -> Self {
        Self {
            cycler,
            selected_supply_pile: None,
            selected_hand_card: None,
            phase: TurnPhase::default(),
        }
    }

    /// Clear the draft and both gesture selections, and set the phase.
    ///
    /// The cycler's cap is kept.
    pub fn reset(&mut self, phase: TurnPhase) {
        self.cycler.reset();
        self.clear_targets();
        self.phase = phase;
    }

    /// Clear the selected pile and hand card.
    pub fn clear_targets(&mut self) {
        self.selected_supply_pile = None;
        self.selected_hand_card = None;
    }

    /// Check if `name` is the selected supply pile.
    #[must_use]
    pub fn is_pile_selected(&self, name: &str) -> bool {
        self.selected_supply_pile.as_deref() == Some(name)
    }

    /// Check if `name` is the selected hand card.
    #[must_use]
    pub fn is_hand_card_selected(&self, name: &str) -> bool {
        self.selected_hand_card.as_deref() == Some(name)
    }
}
