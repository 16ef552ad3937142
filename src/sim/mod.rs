//! Scenario-driven host simulator.
//!
//! # Data Flow
//! ```text
//! scenario.toml
//!     → scenario.rs (timed events, session roster, config, gameplay setup)
//!     → runner.rs (drives a FailureOrchestrator in real time)
//!         ↔ session::InMemorySession (roster, failures)
//!         ↔ presenters.rs (logging presentation collaborators)
//!     → SimSummary (JSON on stdout)
//! ```
//!
//! # Design Decisions
//! - A forced match end ends the run, as the real host would
//! - Presenters record what they were asked to do so the summary can show it

pub mod presenters;
pub mod runner;
pub mod scenario;

pub use runner::{run_scenario, SimSummary};
pub use scenario::{Action, Scenario, ScenarioEvent};
