//! AttackResult / BlockResult - Outcomes of combat resolution

use serde::{Deserialize, Serialize};

/// Kind of attack hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    /// Strong hit - bonus damage and guard break
    Critical,
    /// Standard damage
    Normal,
    /// Weak hit - reduced damage, attacker staggers
    Resisted,
}

/// Result of resolving an attack against a defense element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    pub damage: u32,
    /// Whether the attacker should stagger
    pub attacker_stagger: bool,
    /// Whether the target's guard is broken
    pub guard_break: bool,
}

impl AttackResult {
    pub fn is_critical(&self) -> bool {
        self.outcome == AttackOutcome::Critical
    }

    pub fn is_resisted(&self) -> bool {
        self.outcome == AttackOutcome::Resisted
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{:?}: {} damage", self.outcome, self.damage)];
        if self.guard_break {
            parts.push("GUARD BREAK".to_string());
        }
        if self.attacker_stagger {
            parts.push("attacker staggers".to_string());
        }
        parts.join(", ")
    }
}

/// Kind of block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOutcome {
    /// No damage
    Perfect,
    /// Chip damage
    Partial,
    /// Full damage, stagger and knockback
    Failed,
}

/// Result of resolving a block against an incoming projectile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResult {
    pub outcome: BlockOutcome,
    pub damage_taken: u32,
    pub stagger: bool,
    pub knockback: bool,
}

impl BlockResult {
    /// A hit that was not blocked at all lands like a failed block
    pub fn unblocked(incoming_damage: u32) -> Self {
        BlockResult {
            outcome: BlockOutcome::Failed,
            damage_taken: incoming_damage,
            stagger: true,
            knockback: true,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{:?} block: {} damage taken",
            self.outcome, self.damage_taken
        )];
        if self.stagger {
            parts.push("stagger".to_string());
        }
        if self.knockback {
            parts.push("knockback".to_string());
        }
        parts.join(", ")
    }
}
