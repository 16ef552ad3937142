//! Multiplayer session collaborators.
//!
//! # Data Flow
//! ```text
//! External session service
//!     → SessionFacade (connection state, roster, per-participant failure)
//!     → read-only by the last-standing monitor, once per tick
//!
//! Last-standing decision
//!     → MatchEndHandler::force_match_end() (host's zero-energy handler)
//! ```
//!
//! # Design Decisions
//! - The facade is read-only; nothing in this crate mutates session state
//! - A roster is returned by value so one tick decides on one snapshot
//! - `memory.rs` is a complete in-process implementation used by the simulator
//!   and by tests

pub mod memory;

pub use memory::InMemorySession;

/// One participant as seen by a single monitor tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSnapshot {
    /// Session-level participant id, informational only.
    pub id: String,
    /// True for the player running this process.
    pub is_local: bool,
    /// True once the participant's own run has failed.
    pub has_failed: bool,
}

impl ParticipantSnapshot {
    pub fn local(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_local: true,
            has_failed: false,
        }
    }

    pub fn remote(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_local: false,
            has_failed: false,
        }
    }

    pub fn failed(mut self) -> Self {
        self.has_failed = true;
        self
    }
}

/// Read access to the multiplayer session.
pub trait SessionFacade: Send + Sync {
    /// Whether the local client is connected to a multiplayer session.
    fn is_connected(&self) -> bool;

    /// Number of connected participants.
    fn connected_participant_count(&self) -> usize;

    /// Ordered snapshot of the connected participants.
    fn connected_participants(&self) -> Vec<ParticipantSnapshot>;
}

/// Ends the match immediately, as if the local energy reached zero.
pub trait MatchEndHandler: Send + Sync {
    fn force_match_end(&self);
}

/// True when no remote participant is still playing.
///
/// The local participant's own state is deliberately ignored.
pub fn all_remote_failed(roster: &[ParticipantSnapshot]) -> bool {
    !roster.iter().any(|p| !p.is_local && !p.has_failed)
}
