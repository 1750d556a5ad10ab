//! Archetype definitions and factories

use crate::config::ConfigError;
use crate::element::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of elements a single enemy may carry
pub const MAX_ELEMENTS: usize = 2;

/// Enemy template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyArchetype {
    /// Basic melee enemy - single defense element
    Grunt,
    /// Ranged enemy - single attack element
    Shooter,
    /// Both defense and attack elements
    Elite,
}

impl EnemyArchetype {
    /// Get all archetypes
    pub fn all() -> &'static [EnemyArchetype] {
        &[
            EnemyArchetype::Grunt,
            EnemyArchetype::Shooter,
            EnemyArchetype::Elite,
        ]
    }
}

/// Error from strict enemy validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnemyError {
    #[error("{archetype:?} carries {count} elements, at most {max} are allowed")]
    TooManyElements {
        archetype: EnemyArchetype,
        count: usize,
        max: usize,
    },
}

/// Stat block for a spawned enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub archetype: EnemyArchetype,
    /// Element that resists player attacks (body color)
    pub defense_element: Option<Element>,
    /// Element of projectile attacks (projectile color)
    pub attack_element: Option<Element>,
    pub health: u32,
    /// Movement speed multiplier (1.0 = baseline)
    pub speed_multiplier: f64,
    /// Contact damage dealt to the player
    pub damage: u32,
}

impl EnemyConfig {
    /// Elements carried by this enemy, defense first
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.defense_element.iter().chain(self.attack_element.iter()).copied()
    }

    /// Strict counterpart of [`validate`]
    pub fn validated(self) -> Result<Self, EnemyError> {
        let count = count_elements(&self);
        if count > MAX_ELEMENTS {
            return Err(EnemyError::TooManyElements {
                archetype: self.archetype,
                count,
                max: MAX_ELEMENTS,
            });
        }
        Ok(self)
    }
}

/// Baseline stats for one archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub health: u32,
    pub speed_multiplier: f64,
    pub damage: u32,
}

impl ArchetypeStats {
    fn build(
        &self,
        archetype: EnemyArchetype,
        defense_element: Option<Element>,
        attack_element: Option<Element>,
    ) -> EnemyConfig {
        EnemyConfig {
            archetype,
            defense_element,
            attack_element,
            health: self.health,
            speed_multiplier: self.speed_multiplier,
            damage: self.damage,
        }
    }
}

/// Tunable baselines for every archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeConstants {
    #[serde(default = "default_grunt")]
    pub grunt: ArchetypeStats,
    #[serde(default = "default_shooter")]
    pub shooter: ArchetypeStats,
    #[serde(default = "default_elite")]
    pub elite: ArchetypeStats,
}

impl Default for ArchetypeConstants {
    fn default() -> Self {
        ArchetypeConstants {
            grunt: default_grunt(),
            shooter: default_shooter(),
            elite: default_elite(),
        }
    }
}

fn default_grunt() -> ArchetypeStats {
    ArchetypeStats {
        health: 100,
        speed_multiplier: 1.0,
        damage: 20,
    }
}

fn default_shooter() -> ArchetypeStats {
    ArchetypeStats {
        health: 60,
        speed_multiplier: 0.8,
        damage: 15,
    }
}

fn default_elite() -> ArchetypeStats {
    ArchetypeStats {
        health: 200,
        speed_multiplier: 0.7,
        damage: 30,
    }
}

impl ArchetypeConstants {
    /// Baseline stats for an archetype
    pub fn stats(&self, archetype: EnemyArchetype) -> &ArchetypeStats {
        match archetype {
            EnemyArchetype::Grunt => &self.grunt,
            EnemyArchetype::Shooter => &self.shooter,
            EnemyArchetype::Elite => &self.elite,
        }
    }

    /// Melee enemy with a single defense element
    pub fn grunt(&self, defense: Element) -> EnemyConfig {
        self.grunt.build(EnemyArchetype::Grunt, Some(defense), None)
    }

    /// Ranged enemy with a single attack element
    pub fn shooter(&self, attack: Element) -> EnemyConfig {
        self.shooter.build(EnemyArchetype::Shooter, None, Some(attack))
    }

    /// Enemy with both a defense and an attack element
    pub fn elite(&self, defense: Element, attack: Element) -> EnemyConfig {
        self.elite.build(EnemyArchetype::Elite, Some(defense), Some(attack))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for &archetype in EnemyArchetype::all() {
            let stats = self.stats(archetype);
            if !stats.speed_multiplier.is_finite() || stats.speed_multiplier < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "archetypes.{:?}.speed_multiplier must be a non-negative number, got {}",
                    archetype, stats.speed_multiplier
                )));
            }
            if stats.health == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "archetypes.{:?}.health must be greater than zero",
                    archetype
                )));
            }
        }
        Ok(())
    }
}

/// Create a grunt with default baselines
pub fn make_grunt(defense: Element) -> EnemyConfig {
    ArchetypeConstants::default().grunt(defense)
}

/// Create a shooter with default baselines
pub fn make_shooter(attack: Element) -> EnemyConfig {
    ArchetypeConstants::default().shooter(attack)
}

/// Create an elite with default baselines
pub fn make_elite(defense: Element, attack: Element) -> EnemyConfig {
    ArchetypeConstants::default().elite(defense, attack)
}

/// Number of elements an enemy carries
pub fn count_elements(config: &EnemyConfig) -> usize {
    config.elements().count()
}

/// Check the element limit. Advisory: callers decide whether to reject.
pub fn validate(config: &EnemyConfig) -> bool {
    count_elements(config) <= MAX_ELEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grunt_baseline() {
        let grunt = make_grunt(Element::Earth);
        assert_eq!(grunt.archetype, EnemyArchetype::Grunt);
        assert_eq!(grunt.defense_element, Some(Element::Earth));
        assert_eq!(grunt.attack_element, None);
        assert_eq!(grunt.health, 100);
        assert!((grunt.speed_multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(grunt.damage, 20);
        assert_eq!(count_elements(&grunt), 1);
    }

    #[test]
    fn test_shooter_baseline() {
        let shooter = make_shooter(Element::Water);
        assert_eq!(shooter.defense_element, None);
        assert_eq!(shooter.attack_element, Some(Element::Water));
        assert_eq!(shooter.health, 60);
        assert!((shooter.speed_multiplier - 0.8).abs() < f64::EPSILON);
        assert_eq!(shooter.damage, 15);
        assert_eq!(count_elements(&shooter), 1);
    }

    #[test]
    fn test_elite_baseline() {
        let elite = make_elite(Element::Fire, Element::Lightning);
        assert_eq!(elite.health, 200);
        assert!((elite.speed_multiplier - 0.7).abs() < f64::EPSILON);
        assert_eq!(elite.damage, 30);
        assert_eq!(count_elements(&elite), 2);
        assert_eq!(
            elite.elements().collect::<Vec<_>>(),
            vec![Element::Fire, Element::Lightning]
        );
    }

    #[test]
    fn test_every_factory_output_is_valid() {
        for &a in Element::all() {
            assert!(validate(&make_grunt(a)));
            assert!(validate(&make_shooter(a)));
            for &b in Element::all() {
                let elite = make_elite(a, b);
                assert!(validate(&elite));
                assert!(count_elements(&elite) <= MAX_ELEMENTS);
                assert!(elite.validated().is_ok());
            }
        }
    }

    #[test]
    fn test_elementless_config_counts_zero() {
        let mut grunt = make_grunt(Element::Fire);
        grunt.defense_element = None;
        assert_eq!(count_elements(&grunt), 0);
        assert!(validate(&grunt));
    }

    #[test]
    fn test_tuned_baselines() {
        let toml = r#"
[grunt]
health = 150
speed_multiplier = 1.2
damage = 25
"#;
        let constants: ArchetypeConstants = toml::from_str(toml).unwrap();
        let grunt = constants.grunt(Element::Water);
        assert_eq!(grunt.health, 150);
        assert_eq!(grunt.damage, 25);
        assert_eq!(constants.shooter(Element::Fire).health, 60);
    }

    #[test]
    fn test_zero_health_rejected() {
        let mut constants = ArchetypeConstants::default();
        constants.elite.health = 0;
        assert!(constants.validate().is_err());
    }
}
