//! Core roster types: players, initiative values, errors.
//!
//! These are the building blocks the [`Tracker`](crate::Tracker) state
//! machine operates on.

pub mod error;
pub mod initiative;
pub mod player;

pub use error::TrackerError;
pub use initiative::Initiative;
pub use player::{Player, PlayerId, PlayerStatus};
