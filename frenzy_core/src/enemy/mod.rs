//! Enemy archetypes - Grunt, Shooter and Elite stat blocks

mod archetype;
mod spawn;

pub use archetype::{
    count_elements, make_elite, make_grunt, make_shooter, validate, ArchetypeConstants,
    ArchetypeStats, EnemyArchetype, EnemyConfig, EnemyError, MAX_ELEMENTS,
};
pub use spawn::{roll_archetype, roll_element, roll_enemy};
