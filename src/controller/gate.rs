//! Bail-out capability predicate.

use serde::{Deserialize, Serialize};

use crate::config::BailOutConfig;

/// Game mode of the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Standard,
    Multiplayer,
    Party,
    Mission,
}

/// How the player's energy is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    /// Energy depletes gradually.
    #[default]
    Bar,
    /// Fixed number of lives.
    Battery,
}

/// Modifiers chosen for the level. Fixed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayModifiers {
    pub insta_fail: bool,
    pub energy_type: EnergyType,
}

/// Gameplay setup of the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySetup {
    pub mode: GameMode,
    pub modifiers: GameplayModifiers,
}

impl GameplaySetup {
    pub fn multiplayer() -> Self {
        Self {
            mode: GameMode::Multiplayer,
            modifiers: GameplayModifiers::default(),
        }
    }

    /// Whether bail-out handling applies to this match under `config`.
    pub fn allows_bail_out(&self, config: &BailOutConfig) -> bool {
        config.is_enabled
            && self.mode != GameMode::Mission
            && !self.modifiers.insta_fail
            && self.modifiers.energy_type == EnergyType::Bar
    }
}
