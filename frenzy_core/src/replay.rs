//! Replay - Drive a session from a scripted list of timed events
//!
//! Scripts are plain data (TOML or JSON), so a recorded run can be played
//! back and compared deterministically.

use crate::combat::{AttackResult, BlockResult};
use crate::config::{ConfigError, FrenzyConstants};
use crate::element::Element;
use crate::player::{PlayerState, StateChange};
use crate::session::{FiredAction, PlayerSession};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Replay error
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Failed to load replay script: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to parse JSON replay script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Event {index} at {at}ms is earlier than the previous event at {previous}ms")]
    NonMonotonicTime { index: usize, at: u64, previous: u64 },
}

/// One scripted event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// A key or pointer press reported by the input layer
    Press { key: String, at: u64 },
    /// Frame update
    Tick { at: u64 },
    /// Player touches ground
    Land { at: u64 },
    /// Player's sword hits an enemy body
    Strike {
        defense: Element,
        #[serde(default)]
        base_damage: Option<u32>,
        at: u64,
    },
    /// Enemy projectile reaches the player
    Incoming { element: Element, damage: u32, at: u64 },
    Kill { at: u64 },
    Reset { at: u64 },
}

impl ReplayEvent {
    pub fn at(&self) -> u64 {
        match self {
            ReplayEvent::Press { at, .. }
            | ReplayEvent::Tick { at }
            | ReplayEvent::Land { at }
            | ReplayEvent::Strike { at, .. }
            | ReplayEvent::Incoming { at, .. }
            | ReplayEvent::Kill { at }
            | ReplayEvent::Reset { at } => *at,
        }
    }
}

/// A scripted run for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub player_element: Element,
    #[serde(default)]
    pub start_at: u64,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    /// Load from a file; `.json` files are JSON, everything else TOML
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(crate::config::load_toml(path)?)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ReplayError> {
        Ok(crate::config::parse_toml(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reject scripts whose timestamps go backwards
    pub fn check_timeline(&self) -> Result<(), ReplayError> {
        let mut previous = self.start_at;
        for (index, event) in self.events.iter().enumerate() {
            let at = event.at();
            if at < previous {
                return Err(ReplayError::NonMonotonicTime { index, at, previous });
            }
            previous = at;
        }
        Ok(())
    }
}

/// What happened in response to one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayOutcome {
    Fired(FiredAction),
    Attack { at: u64, result: AttackResult },
    Block { at: u64, result: BlockResult },
    Ignored { at: u64, key: String },
}

/// Everything recorded during a replay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub outcomes: Vec<ReplayOutcome>,
    pub state_changes: Vec<StateChange>,
    pub final_state: Option<PlayerState>,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

impl ReplayLog {
    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{} outcomes, {} state changes, {} dealt, {} taken, final state {:?}",
            self.outcomes.len(),
            self.state_changes.len(),
            self.damage_dealt,
            self.damage_taken,
            self.final_state.unwrap_or(PlayerState::Running),
        )
    }
}

/// Run a script through a fresh session
pub fn run_replay(script: &ReplayScript, constants: &FrenzyConstants) -> Result<ReplayLog, ReplayError> {
    constants.validate()?;
    script.check_timeline()?;

    let mut session = PlayerSession::new(script.player_element, constants, script.start_at);
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let subscription = session.subscribe(move |change: &StateChange| {
        if let Ok(mut changes) = sink.lock() {
            changes.push(*change);
        }
    });

    let mut log = ReplayLog::default();
    for event in &script.events {
        match event {
            ReplayEvent::Press { key, at } => {
                if session.press(key, *at).is_none() {
                    tracing::debug!(%key, at, "ignoring unbound key");
                    log.outcomes.push(ReplayOutcome::Ignored {
                        at: *at,
                        key: key.clone(),
                    });
                }
            }
            ReplayEvent::Tick { at } => {
                log.outcomes
                    .extend(session.tick(*at).into_iter().map(ReplayOutcome::Fired));
            }
            ReplayEvent::Land { at } => {
                session.land(*at);
            }
            ReplayEvent::Strike {
                defense,
                base_damage,
                at,
            } => {
                let result = session.strike(*defense, *base_damage, *at);
                log.damage_dealt += u64::from(result.damage);
                log.outcomes.push(ReplayOutcome::Attack { at: *at, result });
            }
            ReplayEvent::Incoming { element, damage, at } => {
                let result = session.receive(*element, *damage, *at);
                log.damage_taken += u64::from(result.damage_taken);
                log.outcomes.push(ReplayOutcome::Block { at: *at, result });
            }
            ReplayEvent::Kill { at } => session.kill(*at),
            ReplayEvent::Reset { at } => session.reset(*at),
        }
    }

    session.unsubscribe(subscription);
    log.final_state = Some(session.state());
    log.state_changes = changes.lock().map(|guard| guard.to_vec()).unwrap_or_default();

    tracing::info!(summary = %log.summary(), "replay finished");
    Ok(log)
}
