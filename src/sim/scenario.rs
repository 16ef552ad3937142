//! Scenario file format.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::validation::{validate_config, validate_event_time, ValidationError};
use crate::config::BailOutConfig;
use crate::controller::GameplaySetup;
use crate::error::ConfigError;

/// A scripted match.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Scenario {
    pub config: BailOutConfig,
    pub gameplay: GameplaySetup,
    pub session: SessionSetup,
    pub events: Vec<ScenarioEvent>,
}

/// Initial multiplayer session.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionSetup {
    pub connected: bool,
    pub local_id: String,
    pub remotes: Vec<String>,
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self {
            connected: false,
            local_id: "local".to_string(),
            remotes: Vec::new(),
        }
    }
}

/// Something that happens at a point in match time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioEvent {
    pub at_secs: f64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Local energy reached zero.
    LocalFail,
    /// A remote participant's run failed.
    RemoteFail { participant: String },
    /// Everybody dropped from the session.
    Disconnect,
    /// Host hides the fail indicator early.
    HideEffect,
    /// Scene unloads.
    Teardown,
}

impl Scenario {
    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut scenario: Scenario = toml::from_str(content)?;

        let mut errors = validate_config(&scenario.config)
            .err()
            .unwrap_or_default();
        errors.extend(
            scenario
                .events
                .iter()
                .enumerate()
                .filter_map(|(index, event)| validate_event_time(index, event.at_secs).err()),
        );
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        scenario
            .events
            .sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Ok(scenario)
    }
}
