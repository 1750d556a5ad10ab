//! Element cycle - The four-element rock-paper-scissors relation
//!
//! Cycle (strong against →): Fire → Earth → Lightning → Water → Fire
//!
//! Each element is strong against its successor, weak against its
//! predecessor and neutral against itself and the element opposite it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four combat elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Lightning,
    Water,
}

impl Element {
    /// Get all elements in cycle order
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Earth,
            Element::Lightning,
            Element::Water,
        ]
    }

    /// The element this element is strong against
    pub fn strong_against(self) -> Element {
        match self {
            Element::Fire => Element::Earth,
            Element::Earth => Element::Lightning,
            Element::Lightning => Element::Water,
            Element::Water => Element::Fire,
        }
    }

    /// The element this element is weak against
    pub fn weak_against(self) -> Element {
        match self {
            Element::Fire => Element::Water,
            Element::Earth => Element::Fire,
            Element::Lightning => Element::Earth,
            Element::Water => Element::Lightning,
        }
    }

    /// Lowercase name used in config and replay files
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Lightning => "lightning",
            Element::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown element name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element: {0}")]
pub struct UnknownElement(pub String);

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "earth" => Ok(Element::Earth),
            "lightning" => Ok(Element::Lightning),
            "water" => Ok(Element::Water),
            _ => Err(UnknownElement(s.to_string())),
        }
    }
}

/// Outcome of comparing two elements, from the first element's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matchup {
    /// Attacker has the advantage
    Strong,
    /// No advantage either way
    Neutral,
    /// Defender has the advantage
    Weak,
}

impl Matchup {
    /// The same matchup seen from the other side
    pub fn invert(self) -> Matchup {
        match self {
            Matchup::Strong => Matchup::Weak,
            Matchup::Weak => Matchup::Strong,
            Matchup::Neutral => Matchup::Neutral,
        }
    }
}

/// Resolve the matchup between an attacking and a defending element
pub fn resolve_matchup(attacker: Element, defender: Element) -> Matchup {
    if attacker == defender {
        return Matchup::Neutral;
    }

    if attacker.strong_against() == defender {
        Matchup::Strong
    } else if attacker.weak_against() == defender {
        Matchup::Weak
    } else {
        // Opposite elements in the cycle
        Matchup::Neutral
    }
}

/// Get the next element in the cycle (the one `element` beats)
pub fn next_in_cycle(element: Element) -> Element {
    element.strong_against()
}

/// Get the previous element in the cycle (the one that beats `element`)
pub fn previous_in_cycle(element: Element) -> Element {
    element.weak_against()
}

/// All elements in stable cycle order
pub fn all_elements() -> &'static [Element] {
    Element::all()
}
