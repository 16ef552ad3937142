//! Bail-out mode for multiplayer rhythm games.
//!
//! Instead of ending a run when energy runs out, the player keeps playing and
//! the number of bail-outs is counted and shown. In multiplayer the match is
//! force-ended once every remote participant has failed.

pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod presentation;
pub mod session;
pub mod sim;

pub use config::{BailOutConfig, ConfigStore};
pub use controller::{Collaborators, FailureOrchestrator, FailureOutcome, MatchContext};
pub use lifecycle::Teardown;
