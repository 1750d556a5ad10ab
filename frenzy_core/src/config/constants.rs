//! Game constants configuration

use super::ConfigError;
use crate::enemy::ArchetypeConstants;
use crate::input::{InputAction, KeyBindings};
use crate::player::PlayerState;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrenzyConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub input: InputConstants,
    #[serde(default)]
    pub states: StateDurations,
    #[serde(default)]
    pub archetypes: ArchetypeConstants,
    #[serde(default)]
    pub bindings: KeyBindings,
}

impl FrenzyConstants {
    /// Check that every value is usable by the resolvers
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.combat.validate()?;
        self.input.validate()?;
        self.archetypes.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Base damage for player attacks
    #[serde(default = "default_base_damage")]
    pub base_damage: u32,
    /// Damage multiplier for a strong matchup (3.0 = +200%)
    #[serde(default = "default_strong_multiplier")]
    pub strong_multiplier: f64,
    /// Damage multiplier for a weak matchup
    #[serde(default = "default_weak_multiplier")]
    pub weak_multiplier: f64,
    /// Damage multiplier for a neutral matchup
    #[serde(default = "default_neutral_multiplier")]
    pub neutral_multiplier: f64,
    /// Fraction of incoming damage taken on a partial block
    #[serde(default = "default_chip_damage_percent")]
    pub chip_damage_percent: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            base_damage: 100,
            strong_multiplier: 3.0,
            weak_multiplier: 0.3,
            neutral_multiplier: 1.0,
            chip_damage_percent: 0.25,
        }
    }
}

impl CombatConstants {
    fn validate(&self) -> Result<(), ConfigError> {
        let multipliers = [
            ("strong_multiplier", self.strong_multiplier),
            ("weak_multiplier", self.weak_multiplier),
            ("neutral_multiplier", self.neutral_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "combat.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.chip_damage_percent) {
            return Err(ConfigError::ValidationError(format!(
                "combat.chip_damage_percent must be within 0..=1, got {}",
                self.chip_damage_percent
            )));
        }

        Ok(())
    }
}

fn default_base_damage() -> u32 {
    100
}
fn default_strong_multiplier() -> f64 {
    3.0
}
fn default_weak_multiplier() -> f64 {
    0.3
}
fn default_neutral_multiplier() -> f64 {
    1.0
}
fn default_chip_damage_percent() -> f64 {
    0.25
}

/// Input buffer windows in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConstants {
    #[serde(default = "default_jump_buffer_ms")]
    pub jump_buffer_ms: u64,
    #[serde(default = "default_action_buffer_ms")]
    pub attack_buffer_ms: u64,
    #[serde(default = "default_action_buffer_ms")]
    pub block_buffer_ms: u64,
}

impl Default for InputConstants {
    fn default() -> Self {
        InputConstants {
            jump_buffer_ms: 150,
            attack_buffer_ms: 100,
            block_buffer_ms: 100,
        }
    }
}

impl InputConstants {
    /// Buffer window for an action
    pub fn window(&self, action: InputAction) -> u64 {
        match action {
            InputAction::Jump => self.jump_buffer_ms,
            InputAction::Attack => self.attack_buffer_ms,
            InputAction::Block => self.block_buffer_ms,
        }
    }

    /// Largest window across all actions
    pub fn max_window(&self) -> u64 {
        InputAction::all()
            .iter()
            .map(|&action| self.window(action))
            .max()
            .unwrap_or(0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for &action in InputAction::all() {
            if self.window(action) == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "input buffer window for {:?} must be greater than zero",
                    action
                )));
            }
        }
        Ok(())
    }
}

fn default_jump_buffer_ms() -> u64 {
    150
}
fn default_action_buffer_ms() -> u64 {
    100
}

/// How long each timed player state lasts, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDurations {
    #[serde(default = "default_attacking_ms")]
    pub attacking_ms: u64,
    #[serde(default = "default_blocking_ms")]
    pub blocking_ms: u64,
    #[serde(default = "default_staggered_ms")]
    pub staggered_ms: u64,
    #[serde(default = "default_recovering_ms")]
    pub recovering_ms: u64,
}

impl Default for StateDurations {
    fn default() -> Self {
        StateDurations {
            attacking_ms: 300,
            blocking_ms: 400,
            staggered_ms: 500,
            recovering_ms: 600,
        }
    }
}

impl StateDurations {
    /// Duration of a state, or `None` for untimed states
    pub fn for_state(&self, state: PlayerState) -> Option<u64> {
        match state {
            PlayerState::Attacking => Some(self.attacking_ms),
            PlayerState::Blocking => Some(self.blocking_ms),
            PlayerState::Staggered => Some(self.staggered_ms),
            PlayerState::Recovering => Some(self.recovering_ms),
            PlayerState::Running | PlayerState::Airborne | PlayerState::Dead => None,
        }
    }
}

fn default_attacking_ms() -> u64 {
    300
}
fn default_blocking_ms() -> u64 {
    400
}
fn default_staggered_ms() -> u64 {
    500
}
fn default_recovering_ms() -> u64 {
    600
}
