//! Session synchronization: the single owner of client state.
//!
//! `Session` holds the latest snapshot and the local selection, applies
//! the turnover reset rule, and turns gestures into intents for the
//! transport. It never awaits the transport; results come back as the
//! next snapshot.

pub mod synchronizer;

pub use synchronizer::{InFlightIntent, Session, SnapshotOutcome};
