//! Error definitions.
//!
//! Nothing in here is ever allowed to fail a match. Configuration errors only
//! surface at load time; everything else is logged by the caller and swallowed.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that can occur while loading configuration from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or does not match the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but failed semantic checks.
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors reported by presentation collaborators (indicator, animation, text).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PresentationError {
    #[error("failed to show fail indicator: {0}")]
    Show(String),

    #[error("failed to hide fail indicator: {0}")]
    Hide(String),

    #[error("fail animation error: {0}")]
    Animation(String),

    #[error("counter text error: {0}")]
    Text(String),
}

/// Errors surfaced by the feedback layer to the orchestrator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedbackError {
    /// A collaborator was not injected for this match.
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}
