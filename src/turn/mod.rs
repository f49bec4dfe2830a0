//! Turn logic: phase derivation and the buy/play gesture guard.

pub mod guard;
pub mod phase;

pub use guard::ActionGuard;
pub use phase::{resolve_phase, TurnPhase};
