//! Combat resolution - Elemental attacks and blocks

mod resolution;
mod result;

pub use resolution::{
    floor_damage, is_critical_matchup, is_resisted_matchup, resolve_attack, resolve_block,
    CombatResolver,
};
pub use result::{AttackOutcome, AttackResult, BlockOutcome, BlockResult};
