//! Configuration validation.
//!
//! Returns every problem found, not just the first. The counter position string
//! is not validated here: it is parsed at use with a fallback.

use thiserror::Error;

use crate::config::schema::BailOutConfig;

/// Longest accepted duration or match time, in seconds (one day).
pub const MAX_SECS: f64 = 86_400.0;

/// A single semantic problem in a config value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("fail_effect_duration_secs must be at most {} seconds, got {}", MAX_SECS, .0)]
    Duration(f64),

    #[error("counter_text_size must be positive, got {0}")]
    TextSize(f32),

    #[error("last_standing_interval_secs must be positive and at most {} seconds, got {}", MAX_SECS, .0)]
    PollInterval(f64),

    #[error("event {} has at_secs {}, expected 0 to {} seconds", .index, .at_secs, MAX_SECS)]
    EventTime { index: usize, at_secs: f64 },

    #[error("player_height must be positive, got {0}")]
    PlayerHeight(f32),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &BailOutConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Non-positive durations are allowed and mean "never hide".
    if !(config.fail_effect_duration_secs <= MAX_SECS) {
        errors.push(ValidationError::Duration(config.fail_effect_duration_secs));
    }
    if !(config.counter_text_size > 0.0) {
        errors.push(ValidationError::TextSize(config.counter_text_size));
    }
    if !(config.last_standing_interval_secs > 0.0 && config.last_standing_interval_secs <= MAX_SECS) {
        errors.push(ValidationError::PollInterval(config.last_standing_interval_secs));
    }
    if !(config.player_height > 0.0) {
        errors.push(ValidationError::PlayerHeight(config.player_height));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that a scenario event time can be scheduled.
pub fn validate_event_time(index: usize, at_secs: f64) -> Result<(), ValidationError> {
    if (0.0..=MAX_SECS).contains(&at_secs) {
        Ok(())
    } else {
        Err(ValidationError::EventTime { index, at_secs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&BailOutConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_duration_is_allowed() {
        let config = BailOutConfig {
            fail_effect_duration_secs: -1.0,
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = BailOutConfig {
            fail_effect_duration_secs: f64::NAN,
            counter_text_size: -2.0,
            last_standing_interval_secs: 0.0,
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[1], ValidationError::TextSize(-2.0));
    }

    #[test]
    fn test_huge_durations_are_rejected() {
        let config = BailOutConfig {
            fail_effect_duration_secs: 1e300,
            last_standing_interval_secs: f64::INFINITY,
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Duration(1e300),
                ValidationError::PollInterval(f64::INFINITY),
            ]
        );
    }

    #[test]
    fn test_event_time_range() {
        assert!(validate_event_time(0, 0.0).is_ok());
        assert!(validate_event_time(0, MAX_SECS).is_ok());
        assert!(validate_event_time(1, -1.0).is_err());
        assert!(validate_event_time(2, f64::NAN).is_err());
        assert!(validate_event_time(3, 1e30).is_err());
    }
}
