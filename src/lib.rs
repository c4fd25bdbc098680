//! # initiative-tracker
//!
//! Turn-order tracking core for tabletop games: a game master registers
//! players, assigns each an initiative value, starts a turn cycle
//! ordered descending by initiative, and steps through turns while
//! marking players dead or alive.
//!
//! ## Design Principles
//!
//! 1. **One owner, no globals**: all state lives in a [`Tracker`] the
//!    caller owns and passes around. Nothing is process-wide.
//!
//! 2. **Snapshots over shared state**: every mutation returns a
//!    [`Snapshot`] read view backed by `im` persistent vectors, so the
//!    presentation layer renders from cheap detached copies.
//!
//! 3. **Explicit failures**: preconditions surface as [`TrackerError`]
//!    values and never change state. Addressing a missing id reports
//!    `NotFound` rather than silently doing nothing.
//!
//! ## Modules
//!
//! - `core`: player records, initiative values, the error taxonomy
//! - `tracker`: the roster state machine and its snapshot view
//!
//! ## Example
//!
//! ```
//! use initiative_tracker::Tracker;
//!
//! let mut tracker = Tracker::new();
//! let (hero, _) = tracker.add_player()?;
//! let (rogue, _) = tracker.add_player()?;
//! tracker.save_player(hero, "Sera", "14")?;
//! tracker.save_player(rogue, "Korrin", "33")?;
//!
//! let snapshot = tracker.start_game()?;
//! assert_eq!(snapshot.current_player().unwrap().name, "Korrin");
//!
//! let snapshot = tracker.advance_turn()?;
//! assert_eq!(snapshot.current_player().unwrap().name, "Sera");
//! # Ok::<(), initiative_tracker::TrackerError>(())
//! ```

pub mod core;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{Initiative, Player, PlayerId, PlayerStatus, TrackerError};
pub use crate::tracker::{Snapshot, Tracker};
