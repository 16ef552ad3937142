//! Presentation collaborators.
//!
//! # Data Flow
//! ```text
//! FailureOrchestrator
//!     → text.rs (counter label, font size, placement) → CounterText
//!     → feedback::EffectDebouncer → FailIndicator::show/hide
//!     → feedback::AnimationGate   → FailAnimation::stop/play
//! ```
//!
//! # Design Decisions
//! - Collaborators are injected per match; a missing one disables only its feature
//! - Every call returns a `Result`; callers log and swallow the error

pub mod text;

use crate::config::Vector3;
use crate::error::PresentationError;

/// The "level failed" indicator shown over the playfield.
pub trait FailIndicator: Send + Sync {
    fn show(&self) -> Result<(), PresentationError>;
    fn hide(&self) -> Result<(), PresentationError>;
}

/// The energy bar fail animation.
pub trait FailAnimation: Send + Sync {
    /// Stop playback. Must be a no-op when idle.
    fn stop(&self) -> Result<(), PresentationError>;
    /// Start playback from the beginning.
    fn play(&self) -> Result<(), PresentationError>;
}

/// World-space text showing the bail-out counter.
pub trait CounterText: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), PresentationError>;

    fn font_size(&self) -> f32;

    fn set_font_size(&self, size: f32) -> Result<(), PresentationError>;

    /// Width and height of the laid-out text, in text units.
    fn rendered_size(&self) -> (f32, f32);

    fn place(&self, placement: Placement) -> Result<(), PresentationError>;
}

/// Where the counter goes and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vector3,
    /// Look direction, from the player's eyes towards the anchor.
    pub facing: Vector3,
}
