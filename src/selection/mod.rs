//! Local, client-owned selection state.
//!
//! - `SelectionCycler`: neutral / included / excluded draft for custom setup
//! - `SelectionState`: the draft plus the selected pile, hand card, and phase
//! - `HoverTracker`: card under the pointer

pub mod cycler;
pub mod hover;
pub mod state;

pub use cycler::{Membership, SelectionCycler};
pub use hover::HoverTracker;
pub use state::SelectionState;
