//! Bail-out controller.
//!
//! # Data Flow
//! ```text
//! Host "level failed" event
//!     → orchestrator.rs: gate.rs predicate (fresh config read)
//!     → fail_count += 1
//!     → monitor::LastStandingMonitor::start() (connected sessions only)
//!     → presentation::text (counter label)
//!     → feedback::EffectDebouncer::trigger()
//!     → feedback::AnimationGate::play()
//!
//! Host scene unload
//!     → orchestrator.rs teardown → lifecycle::Teardown
//! ```
//!
//! # Design Decisions
//! - One orchestrator per match, built from an explicit MatchContext
//! - Collaborators are injected; any of them may be missing
//! - Failure handling takes `&mut self`, so events are processed serially

pub mod context;
pub mod gate;
pub mod orchestrator;
pub mod state;

pub use context::{Collaborators, MatchContext};
pub use gate::{EnergyType, GameMode, GameplayModifiers, GameplaySetup};
pub use orchestrator::{FailureOrchestrator, FailureOutcome, FailureReport};
pub use state::FailureState;
