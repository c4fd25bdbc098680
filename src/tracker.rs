//! The turn tracker: roster bookkeeping plus the turn-cycle state machine.
//!
//! ## Tracker
//!
//! Owns the authoritative roster and the "game started" flag, and
//! enforces the record lifecycle:
//!
//! - `add_player` creates a blank record in editing state.
//! - `save_player` commits it as `Alive` and re-sorts the roster.
//! - `start_game` drops never-saved records and hands the first turn to
//!   the top of the initiative order.
//! - `advance_turn` walks the order circularly, skipping the dead.
//! - `stop_game` ends the cycle and resets everyone to `Alive`.
//!
//! ## Snapshot
//!
//! Every mutation returns a [`Snapshot`], a detached read view of
//! `{started, roster}` for the presentation layer to render. The roster
//! is an `im::Vector`, so taking a snapshot is structural sharing, not
//! a deep copy, and later mutations never show through.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Initiative, Player, PlayerId, PlayerStatus, TrackerError};

/// Roster manager and turn-cycle state machine.
///
/// Single-threaded by design: every operation runs to completion and
/// either mutates the roster and returns a fresh [`Snapshot`], or fails
/// with a [`TrackerError`] and leaves the roster untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tracker {
    started: bool,
    players: Vector<Player>,
    next_id: u32,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    /// Create a tracker with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: false,
            players: Vector::new(),
            next_id: 0,
        }
    }

    /// Create a tracker seeded with already-saved players.
    ///
    /// Each `(name, initiative)` pair becomes an `Alive` record, and the
    /// roster is sorted, ready for `start_game`.
    ///
    /// ```
    /// use initiative_tracker::Tracker;
    ///
    /// let tracker = Tracker::with_players([("Player 1", "14"), ("Player 2", "33")]);
    /// assert_eq!(tracker.len(), 2);
    /// ```
    #[must_use]
    pub fn with_players<I, N, V>(players: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Initiative>,
    {
        let mut tracker = Self::new();
        for (name, initiative) in players {
            let id = tracker.alloc_id();
            tracker.players.push_back(Player::saved(id, name, initiative));
        }
        tracker.sort_roster();
        tracker
    }

    // === Read View ===

    /// Check if a game is running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Get the roster size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Take a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            started: self.started,
            players: self.players.clone(),
        }
    }

    // === Roster Editing ===

    /// Append a blank record, open for editing.
    ///
    /// The new record has a fresh id, empty name and initiative,
    /// `Undefined` status, and sorts to the bottom of the order until
    /// it is saved with a numeric initiative. The returned id addresses
    /// the record in later calls.
    ///
    /// Fails with `AlreadyStarted` while a game is running: a started
    /// roster never holds never-saved records, so drafts can only be
    /// created between games.
    pub fn add_player(&mut self) -> Result<(PlayerId, Snapshot), TrackerError> {
        if self.started {
            return Err(TrackerError::AlreadyStarted);
        }
        let id = self.alloc_id();
        self.players.push_back(Player::draft(id));
        self.sort_roster();
        Ok((id, self.snapshot()))
    }

    /// Commit a record's name and initiative.
    ///
    /// Clears the editing flag, marks the record `Alive`, and re-sorts
    /// the roster by the new initiative.
    pub fn save_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
        initiative: impl Into<Initiative>,
    ) -> Result<Snapshot, TrackerError> {
        let player = self.player_mut(id)?;
        player.name = name.into();
        player.initiative = initiative.into();
        player.status = PlayerStatus::Alive;
        player.is_editing = false;
        self.sort_roster();
        Ok(self.snapshot())
    }

    /// Remove a record from the roster.
    ///
    /// The core deletes unconditionally; asking the user "really
    /// delete?" is the presentation layer's job.
    pub fn delete_player(&mut self, id: PlayerId) -> Result<Snapshot, TrackerError> {
        let index = self.index_of(id).ok_or(TrackerError::NotFound(id))?;
        self.players.remove(index);
        Ok(self.snapshot())
    }

    /// Abandon an in-progress edit.
    ///
    /// A never-saved record is removed outright; a saved record keeps
    /// all its fields and only drops the editing flag.
    pub fn cancel_editing(&mut self, id: PlayerId) -> Result<Snapshot, TrackerError> {
        let index = self.index_of(id).ok_or(TrackerError::NotFound(id))?;
        if self.players[index].status.is_undefined() {
            self.players.remove(index);
        } else {
            self.players[index].is_editing = false;
        }
        Ok(self.snapshot())
    }

    /// Reopen a record for editing.
    pub fn set_editing(&mut self, id: PlayerId) -> Result<Snapshot, TrackerError> {
        self.player_mut(id)?.is_editing = true;
        Ok(self.snapshot())
    }

    // === Turn Cycle ===

    /// Start the turn cycle.
    ///
    /// Requires at least two saved players; never-saved (`Undefined`)
    /// records are dropped from the roster. The record at the top of
    /// the initiative order takes the first turn.
    pub fn start_game(&mut self) -> Result<Snapshot, TrackerError> {
        if self.started {
            return Err(TrackerError::AlreadyStarted);
        }

        let have = self.players.iter().filter(|p| p.is_eligible()).count();
        if have < 2 {
            return Err(TrackerError::InsufficientPlayers { have });
        }

        self.players = self
            .players
            .iter()
            .filter(|p| p.is_eligible())
            .cloned()
            .collect();
        self.started = true;
        self.set_current(0);
        Ok(self.snapshot())
    }

    /// Hand the turn to the next living player in initiative order.
    ///
    /// Scans circularly from the record after the current one, skipping
    /// `Dead` records. With every record dead there is no next turn, so
    /// the scan fails with `NoAlivePlayers` instead of looping. If the
    /// current record was deleted mid-game, the scan restarts from the
    /// top of the order.
    pub fn advance_turn(&mut self) -> Result<Snapshot, TrackerError> {
        if !self.started {
            return Err(TrackerError::NotStarted);
        }
        if !self.players.iter().any(|p| !p.status.is_dead()) {
            return Err(TrackerError::NoAlivePlayers);
        }

        let len = self.players.len();
        let mut index = match self.players.iter().position(|p| p.is_current_turn) {
            Some(current) => (current + 1) % len,
            None => 0,
        };
        while self.players[index].status.is_dead() {
            index = (index + 1) % len;
        }
        self.set_current(index);
        Ok(self.snapshot())
    }

    /// Mark a record dead. It keeps its place in the order but is
    /// skipped by `advance_turn`.
    pub fn kill_player(&mut self, id: PlayerId) -> Result<Snapshot, TrackerError> {
        self.player_mut(id)?.status = PlayerStatus::Dead;
        Ok(self.snapshot())
    }

    /// Mark a record alive again.
    pub fn revive_player(&mut self, id: PlayerId) -> Result<Snapshot, TrackerError> {
        self.player_mut(id)?.status = PlayerStatus::Alive;
        Ok(self.snapshot())
    }

    /// End the turn cycle.
    ///
    /// Clears the started flag and the current-turn marker, and resets
    /// every status to `Alive`. Dead records come back alive; who died
    /// is not remembered across games. Always succeeds.
    pub fn stop_game(&mut self) -> Snapshot {
        self.started = false;
        for player in self.players.iter_mut() {
            player.status = PlayerStatus::Alive;
            player.is_current_turn = false;
        }
        self.snapshot()
    }

    // === Internals ===

    fn alloc_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, TrackerError> {
        let index = self.index_of(id).ok_or(TrackerError::NotFound(id))?;
        Ok(&mut self.players[index])
    }

    /// Stable descending sort by parsed initiative; records without a
    /// numeric value sink to the bottom, ties keep insertion order.
    /// The cached key parses each initiative once per sort.
    fn sort_roster(&mut self) {
        let mut sorted: Vec<Player> = self.players.iter().cloned().collect();
        sorted.sort_by_cached_key(|p| std::cmp::Reverse(p.initiative.value()));
        self.players = sorted.into_iter().collect();
    }

    fn set_current(&mut self, index: usize) {
        for (i, player) in self.players.iter_mut().enumerate() {
            player.is_current_turn = i == index;
        }
    }
}

/// Read-only view of `{started, roster}` for rendering.
///
/// Snapshots are detached: they share structure with the roster they
/// were taken from, but mutations to the tracker never alter a snapshot
/// already handed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    started: bool,
    players: Vector<Player>,
}

impl Snapshot {
    /// Check if a game is running.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Get the roster in display (initiative) order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Iterate the roster in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Get the roster size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The record whose turn it is, if a game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_current_turn)
    }

    /// Count records that are not dead.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| !p.status.is_dead())
            .count()
    }
}
