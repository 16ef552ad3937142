//! Match lifecycle management.
//!
//! # Data Flow
//! ```text
//! Match start:
//!     MatchContext created → Teardown live
//!
//! Match end (scene unload):
//!     FailureOrchestrator::teardown()
//!     → Teardown::trigger() (broadcast + liveness flag)
//!     → monitor loop exits
//!     → pending hide timer cancelled
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative: tasks check liveness after every resume
//! - Teardown is idempotent; Drop of the orchestrator triggers it as well

pub mod teardown;

pub use teardown::Teardown;
