//! Attack and block resolution from elemental matchups

use super::result::{AttackOutcome, AttackResult, BlockOutcome, BlockResult};
use crate::config::CombatConstants;
use crate::element::{resolve_matchup, Element, Matchup};

/// Scale damage by a multiplier, flooring toward zero and clamping at zero
pub fn floor_damage(amount: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(amount) * multiplier).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Resolves attacks and blocks with a set of tuned constants
#[derive(Debug, Clone, Default)]
pub struct CombatResolver {
    constants: CombatConstants,
}

impl CombatResolver {
    pub fn new(constants: CombatConstants) -> Self {
        CombatResolver { constants }
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Resolve an attack at the configured base damage
    pub fn attack(&self, attack: Element, defense: Element) -> AttackResult {
        self.attack_with_damage(attack, defense, self.constants.base_damage)
    }

    /// Resolve an attack
    ///
    /// - Strong: critical, `base × strong_multiplier`, guard break
    /// - Weak: resisted, `base × weak_multiplier`, attacker staggers
    /// - Neutral: normal, `base × neutral_multiplier`
    pub fn attack_with_damage(
        &self,
        attack: Element,
        defense: Element,
        base_damage: u32,
    ) -> AttackResult {
        let result = match resolve_matchup(attack, defense) {
            Matchup::Strong => AttackResult {
                outcome: AttackOutcome::Critical,
                damage: floor_damage(base_damage, self.constants.strong_multiplier),
                attacker_stagger: false,
                guard_break: true,
            },
            Matchup::Weak => AttackResult {
                outcome: AttackOutcome::Resisted,
                damage: floor_damage(base_damage, self.constants.weak_multiplier),
                attacker_stagger: true,
                guard_break: false,
            },
            Matchup::Neutral => AttackResult {
                outcome: AttackOutcome::Normal,
                damage: floor_damage(base_damage, self.constants.neutral_multiplier),
                attacker_stagger: false,
                guard_break: false,
            },
        };

        tracing::trace!(
            %attack,
            %defense,
            base_damage,
            outcome = ?result.outcome,
            damage = result.damage,
            "resolved attack"
        );
        result
    }

    /// Resolve a block. The matchup is taken from the shield's side: a shield
    /// that beats the projectile's element blocks perfectly.
    pub fn block(&self, projectile: Element, shield: Element, incoming_damage: u32) -> BlockResult {
        let result = match resolve_matchup(shield, projectile) {
            Matchup::Strong => BlockResult {
                outcome: BlockOutcome::Perfect,
                damage_taken: 0,
                stagger: false,
                knockback: false,
            },
            Matchup::Weak => BlockResult::unblocked(incoming_damage),
            Matchup::Neutral => BlockResult {
                outcome: BlockOutcome::Partial,
                damage_taken: floor_damage(incoming_damage, self.constants.chip_damage_percent),
                stagger: false,
                knockback: false,
            },
        };

        tracing::trace!(
            %projectile,
            %shield,
            incoming_damage,
            outcome = ?result.outcome,
            damage_taken = result.damage_taken,
            "resolved block"
        );
        result
    }
}

/// Resolve an attack with default constants
pub fn resolve_attack(attack: Element, defense: Element, base_damage: u32) -> AttackResult {
    CombatResolver::default().attack_with_damage(attack, defense, base_damage)
}

/// Resolve a block with default constants
pub fn resolve_block(projectile: Element, shield: Element, incoming_damage: u32) -> BlockResult {
    CombatResolver::default().block(projectile, shield, incoming_damage)
}

/// Would this attack land as a critical
pub fn is_critical_matchup(attack: Element, defense: Element) -> bool {
    resolve_matchup(attack, defense) == Matchup::Strong
}

/// Would this attack be resisted
pub fn is_resisted_matchup(attack: Element, defense: Element) -> bool {
    resolve_matchup(attack, defense) == Matchup::Weak
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Element::*;

    #[test]
    fn test_strong_attack_is_critical() {
        let result = resolve_attack(Fire, Earth, 100);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, 300);
        assert!(result.guard_break);
        assert!(!result.attacker_stagger);
    }

    #[test]
    fn test_weak_attack_is_resisted() {
        let result = resolve_attack(Fire, Water, 100);
        assert_eq!(result.outcome, AttackOutcome::Resisted);
        assert_eq!(result.damage, 30);
        assert!(result.attacker_stagger);
        assert!(!result.guard_break);
    }

    #[test]
    fn test_neutral_attack() {
        let same = resolve_attack(Fire, Fire, 100);
        assert_eq!(same.outcome, AttackOutcome::Normal);
        assert_eq!(same.damage, 100);
        assert!(!same.attacker_stagger && !same.guard_break);

        let opposite = resolve_attack(Earth, Water, 70);
        assert_eq!(opposite.outcome, AttackOutcome::Normal);
        assert_eq!(opposite.damage, 70);
    }

    #[test]
    fn test_resolver_uses_configured_base_damage() {
        let resolver = CombatResolver::new(CombatConstants {
            base_damage: 40,
            ..CombatConstants::default()
        });
        assert_eq!(resolver.attack(Lightning, Water).damage, 120);
        assert_eq!(resolver.attack(Lightning, Earth).damage, 12);
    }

    #[test]
    fn test_block_role_reversal() {
        let perfect = resolve_block(Earth, Fire, 100);
        assert_eq!(perfect.outcome, BlockOutcome::Perfect);
        assert_eq!(perfect.damage_taken, 0);
        assert!(!perfect.stagger && !perfect.knockback);

        let failed = resolve_block(Fire, Earth, 100);
        assert_eq!(failed.outcome, BlockOutcome::Failed);
        assert_eq!(failed.damage_taken, 100);
        assert!(failed.stagger && failed.knockback);

        let partial = resolve_block(Fire, Fire, 100);
        assert_eq!(partial.outcome, BlockOutcome::Partial);
        assert_eq!(partial.damage_taken, 25);
        assert!(!partial.stagger && !partial.knockback);
    }

    #[test]
    fn test_chip_damage_floors() {
        // 15 * 0.25 = 3.75
        assert_eq!(resolve_block(Water, Water, 15).damage_taken, 3);
        // 7 * 0.3 = 2.1
        assert_eq!(resolve_attack(Earth, Fire, 7).damage, 2);
        assert_eq!(resolve_attack(Earth, Fire, 0).damage, 0);
    }

    #[test]
    fn test_matchup_predicates() {
        assert!(is_critical_matchup(Water, Fire));
        assert!(!is_critical_matchup(Fire, Water));
        assert!(is_resisted_matchup(Fire, Water));
        assert!(!is_resisted_matchup(Fire, Lightning));
    }

    #[test]
    fn test_floor_damage_clamps() {
        assert_eq!(floor_damage(100, -2.0), 0);
        assert_eq!(floor_damage(100, f64::NAN), 0);
        assert_eq!(floor_damage(u32::MAX, 3.0), u32::MAX);
        assert_eq!(floor_damage(33, 0.3), 9);
    }

    proptest! {
        #[test]
        fn prop_damage_never_exceeds_scaled_value(base in 0u32..1_000_000, mult in 0.0f64..10.0) {
            let damage = floor_damage(base, mult);
            prop_assert!(f64::from(damage) <= f64::from(base) * mult);
            prop_assert!(f64::from(damage) > f64::from(base) * mult - 1.0);
        }

        #[test]
        fn prop_block_never_exceeds_incoming(incoming in 0u32..100_000, p in 0usize..4, s in 0usize..4) {
            let projectile = Element::all()[p];
            let shield = Element::all()[s];
            let result = resolve_block(projectile, shield, incoming);
            prop_assert!(result.damage_taken <= incoming);
        }
    }
}
