//! Prelude module for convenient imports
//!
//! ```rust
//! use frenzy_core::prelude::*;
//! ```

// Elements
pub use crate::element::{resolve_matchup, Element, Matchup};

// Combat
pub use crate::combat::{
    is_critical_matchup, is_resisted_matchup, resolve_attack, resolve_block, AttackOutcome,
    AttackResult, BlockOutcome, BlockResult, CombatResolver,
};

// Enemies
pub use crate::enemy::{make_elite, make_grunt, make_shooter, EnemyArchetype, EnemyConfig};

// Input and player state
pub use crate::input::{InputAction, InputBuffer};
pub use crate::player::{PlayerState, PlayerStateMachine, StateChange};
pub use crate::session::PlayerSession;

// Config
pub use crate::config::{default_constants, FrenzyConstants};
