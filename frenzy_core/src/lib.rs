//! frenzy_core - Rules engine for an elemental side-scrolling combat game
//!
//! This library provides:
//! - Element cycle: Fire → Earth → Lightning → Water matchups
//! - Enemy archetypes: Grunt, Shooter and Elite stat blocks
//! - Combat resolution: attacks and shield blocks against elements
//! - InputBuffer: short-lived memory of early inputs
//! - PlayerStateMachine: validated player state transitions
//! - PlayerSession / replay: per-player wiring and scripted playback
//!
//! The engine never reads the clock; every time-dependent call takes a
//! millisecond timestamp from the caller.

pub mod combat;
pub mod config;
pub mod element;
pub mod enemy;
pub mod input;
pub mod player;
pub mod prelude;
pub mod replay;
pub mod session;

// Re-export core types for convenience
pub use combat::{AttackOutcome, AttackResult, BlockOutcome, BlockResult, CombatResolver};
pub use config::{default_constants, ConfigError, FrenzyConstants};
pub use element::{all_elements, next_in_cycle, previous_in_cycle, resolve_matchup, Element, Matchup};
pub use enemy::{EnemyArchetype, EnemyConfig};
pub use input::{BufferedInput, InputAction, InputBuffer, KeyBindings};
pub use player::{PlayerState, PlayerStateMachine, StateChange, SubscriptionId};
pub use replay::{run_replay, ReplayError, ReplayLog, ReplayScript};
pub use session::{FiredAction, PlayerSession};
