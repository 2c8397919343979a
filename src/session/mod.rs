//! Game session controller.
//!
//! `Session` drives the engine the way a UI controller would: move, check
//! for a no-op by structural equality, spawn only when the board changed,
//! then test for game over. It also tracks the phase, score and move count
//! and can be checkpointed with `SessionSnapshot`.

mod controller;
mod phase;
mod snapshot;

pub use controller::{MoveOutcome, Session};
pub use phase::Phase;
pub use snapshot::SessionSnapshot;
