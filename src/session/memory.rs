//! In-process session implementation.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::session::{MatchEndHandler, ParticipantSnapshot, SessionFacade};

/// A session whose roster is driven directly by the host.
///
/// Also acts as its own [`MatchEndHandler`], counting forced ends.
#[derive(Debug, Default)]
pub struct InMemorySession {
    connected: AtomicBool,
    roster: RwLock<Vec<ParticipantSnapshot>>,
    forced_ends: AtomicUsize,
}

impl InMemorySession {
    /// A connected session with the given roster.
    pub fn connected(roster: Vec<ParticipantSnapshot>) -> Self {
        Self {
            connected: AtomicBool::new(true),
            roster: RwLock::new(roster),
            forced_ends: AtomicUsize::new(0),
        }
    }

    /// A single-player "session": not connected, nobody in the roster.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    pub fn add_participant(&self, participant: ParticipantSnapshot) {
        self.roster_mut().push(participant);
    }

    /// Remove every participant, as after a disconnect.
    pub fn clear(&self) {
        self.roster_mut().clear();
    }

    /// Mark a participant as failed. Returns false if the id is unknown.
    pub fn fail_participant(&self, id: &str) -> bool {
        let mut roster = self.roster_mut();
        match roster.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.has_failed = true;
                true
            }
            None => false,
        }
    }

    /// How many times the match was force-ended.
    pub fn forced_end_count(&self) -> usize {
        self.forced_ends.load(Ordering::SeqCst)
    }

    fn roster_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<ParticipantSnapshot>> {
        self.roster.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionFacade for InMemorySession {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn connected_participant_count(&self) -> usize {
        if !self.is_connected() {
            return 0;
        }
        self.roster.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn connected_participants(&self) -> Vec<ParticipantSnapshot> {
        if !self.is_connected() {
            return Vec::new();
        }
        self.roster.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl MatchEndHandler for InMemorySession {
    fn force_match_end(&self) {
        self.forced_ends.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Match force-ended by last-standing check");
    }
}
