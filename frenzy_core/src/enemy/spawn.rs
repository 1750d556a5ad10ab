//! Random enemy rolls for spawners

use super::archetype::{ArchetypeConstants, EnemyArchetype, EnemyConfig};
use crate::element::{all_elements, Element};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick an element uniformly from the cycle
pub fn roll_element(rng: &mut impl Rng) -> Element {
    *all_elements().choose(rng).unwrap_or(&Element::Fire)
}

/// Pick an archetype uniformly
pub fn roll_archetype(rng: &mut impl Rng) -> EnemyArchetype {
    *EnemyArchetype::all()
        .choose(rng)
        .unwrap_or(&EnemyArchetype::Grunt)
}

/// Roll a complete enemy: archetype first, then the elements it needs
pub fn roll_enemy(rng: &mut impl Rng, archetypes: &ArchetypeConstants) -> EnemyConfig {
    let enemy = match roll_archetype(rng) {
        EnemyArchetype::Grunt => archetypes.grunt(roll_element(rng)),
        EnemyArchetype::Shooter => archetypes.shooter(roll_element(rng)),
        EnemyArchetype::Elite => {
            let defense = roll_element(rng);
            let attack = roll_element(rng);
            archetypes.elite(defense, attack)
        }
    };

    tracing::trace!(
        archetype = ?enemy.archetype,
        defense = ?enemy.defense_element,
        attack = ?enemy.attack_element,
        "rolled enemy"
    );
    enemy
}
