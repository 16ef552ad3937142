//! Failure feedback subsystem.
//!
//! # Data Flow
//! ```text
//! Local failure
//!     → debouncer.rs: Hidden → show indicator → schedule hide timer
//!                     VisiblePending / Visible → leave as is
//!     → animation.rs: stop → play (every failure)
//!
//! Hide timer fires (or forced hide)
//!     → hide indicator → Hidden
//! ```
//!
//! # Design Decisions
//! - At most one hide timer is pending; re-triggers never push the hide time back
//! - The animation restarts on every failure, it is never queued or blended
//! - Presentation errors are logged and swallowed here or by the orchestrator

pub mod animation;
pub mod debouncer;

pub use animation::AnimationGate;
pub use debouncer::{EffectDebouncer, EffectPhase, TriggerOutcome};
