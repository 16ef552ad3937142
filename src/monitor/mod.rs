//! Last-standing detection.
//!
//! # Data Flow
//! ```text
//! First local failure in a connected session
//!     → LastStandingMonitor::start() (idempotent)
//!     → periodic timer
//!     → snapshot roster via SessionFacade
//!     → all remote participants failed? → MatchEndHandler::force_match_end()
//! ```
//!
//! # Design Decisions
//! - Polling instead of push: tolerates transient disconnects and needs no
//!   reliable per-participant event channel
//! - One roster snapshot per tick; the decision never re-reads it
//! - The loop never ends itself; match teardown stops it

pub mod last_standing;

pub use last_standing::{LastStandingMonitor, MonitorHandle, TickOutcome};
