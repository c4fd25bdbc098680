//! Player identification, life status, and roster records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, allocated sequentially by the tracker.
//! Ids are never reused for the lifetime of a tracker, even after the
//! record they named has been deleted.
//!
//! ## Player
//!
//! One roster entry: name, initiative, life status, plus the two
//! per-record flags the presentation layer renders from
//! (`is_current_turn`, `is_editing`).

use serde::{Deserialize, Serialize};

use super::initiative::Initiative;

/// Unique identifier for a roster record.
///
/// Allocated by [`Tracker`](crate::Tracker) from a monotonic counter,
/// so an id identifies the same record for as long as it exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a player ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Life status of a roster record.
///
/// `Undefined` marks a record that was added but never saved: its name
/// and initiative are still blank and it is excluded when a game starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Takes turns normally.
    #[default]
    Alive,
    /// Skipped by turn advancement until revived.
    Dead,
    /// Added but never saved; dropped when the game starts.
    Undefined,
}

impl PlayerStatus {
    /// Check if this status is `Dead`.
    #[must_use]
    pub const fn is_dead(self) -> bool {
        matches!(self, PlayerStatus::Dead)
    }

    /// Check if this status is `Undefined`.
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, PlayerStatus::Undefined)
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayerStatus::Alive => "alive",
            PlayerStatus::Dead => "dead",
            PlayerStatus::Undefined => "undefined",
        };
        f.write_str(s)
    }
}

/// One roster record.
///
/// Records are owned by the [`Tracker`](crate::Tracker); the copies a
/// [`Snapshot`](crate::Snapshot) hands out are detached from the live
/// roster, so mutating them has no effect on the tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id, assigned at creation, never changed.
    pub id: PlayerId,

    /// Display name. Empty while the record is `Undefined`.
    pub name: String,

    /// Turn-order value, kept as the raw text the user entered.
    pub initiative: Initiative,

    /// Life status.
    pub status: PlayerStatus,

    /// True for at most one record, and only while a game is running.
    pub is_current_turn: bool,

    /// True while the record's name/initiative are open in an editor.
    pub is_editing: bool,
}

impl Player {
    /// Create a blank record in editing state, as `add_player` does.
    #[must_use]
    pub fn draft(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            initiative: Initiative::empty(),
            status: PlayerStatus::Undefined,
            is_current_turn: false,
            is_editing: true,
        }
    }

    /// Create an already-saved record, as a seeded roster does.
    #[must_use]
    pub fn saved(id: PlayerId, name: impl Into<String>, initiative: impl Into<Initiative>) -> Self {
        Self {
            id,
            name: name.into(),
            initiative: initiative.into(),
            status: PlayerStatus::Alive,
            is_current_turn: false,
            is_editing: false,
        }
    }

    /// Check if this record counts toward the start-game minimum.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        !self.status.is_undefined()
    }
}
