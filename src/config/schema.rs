//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::validation::MAX_SECS;

/// Root configuration for bail-out mode.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BailOutConfig {
    /// Master switch.
    pub is_enabled: bool,

    /// Show the fail effect on every failure, not only the first one.
    pub repeat_fail_effect: bool,

    /// Show the "level failed" indicator.
    pub show_fail_effect: bool,

    /// Play the energy bar fail animation.
    pub show_fail_animation: bool,

    /// Seconds before the indicator hides again. `<= 0` never hides.
    pub fail_effect_duration_secs: f64,

    /// Font size of the bail-out counter.
    pub counter_text_size: f32,

    /// Counter placement as `"x,y,z"`.
    pub counter_text_position: String,

    /// Poll interval of the last-standing monitor.
    pub last_standing_interval_secs: f64,

    /// Eye height used to orient the counter towards the player.
    pub player_height: f32,
}

impl Default for BailOutConfig {
    fn default() -> Self {
        Self {
            is_enabled: true,
            repeat_fail_effect: true,
            show_fail_effect: true,
            show_fail_animation: true,
            fail_effect_duration_secs: 3.0,
            counter_text_size: 15.0,
            counter_text_position: "0,0.3,2.5".to_string(),
            last_standing_interval_secs: 5.0,
            player_height: 1.8,
        }
    }
}

impl BailOutConfig {
    /// Hide delay for the fail indicator, `None` when it should stay visible.
    ///
    /// Values past [`MAX_SECS`] are clamped, so any positive duration hides.
    pub fn fail_effect_duration(&self) -> Option<Duration> {
        if self.fail_effect_duration_secs > 0.0 {
            Some(Duration::from_secs_f64(self.fail_effect_duration_secs.min(MAX_SECS)))
        } else {
            None
        }
    }

    /// Poll interval of the last-standing monitor.
    ///
    /// Falls back to the default when the configured value is unusable.
    pub fn last_standing_interval(&self) -> Duration {
        match Duration::try_from_secs_f64(self.last_standing_interval_secs) {
            Ok(d) if !d.is_zero() => d,
            _ => Duration::from_secs(5),
        }
    }
}
