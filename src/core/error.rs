//! Error taxonomy for tracker operations.
//!
//! Every failure is local and recoverable: a failed operation leaves the
//! tracker exactly as it was, and the caller can retry after fixing the
//! condition the error names.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Errors reported by [`Tracker`](crate::Tracker) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum TrackerError {
    /// `start_game` needs at least two saved players.
    #[error("need at least 2 players to start, have {have}")]
    InsufficientPlayers {
        /// How many eligible (saved) players the roster held.
        have: usize,
    },

    /// An id-addressed operation named a record that does not exist.
    #[error("no player with id {0}")]
    NotFound(PlayerId),

    /// `advance_turn` found every record dead.
    #[error("every player is dead, no turn to advance to")]
    NoAlivePlayers,

    /// An operation that needs a stopped game (`start_game`,
    /// `add_player`) was called while one is running.
    #[error("game already started")]
    AlreadyStarted,

    /// `advance_turn` while no game is running.
    #[error("game not started")]
    NotStarted,
}
