//! Key bindings - Maps key and pointer names to actions

use super::InputAction;
use serde::{Deserialize, Serialize};

/// Names of the keys bound to each action
///
/// The input layer reports key names (`"SPACE"`, `"J"`, `"POINTER_LEFT"`);
/// matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_jump_keys")]
    pub jump: Vec<String>,
    #[serde(default = "default_attack_keys")]
    pub attack: Vec<String>,
    #[serde(default = "default_block_keys")]
    pub block: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            jump: default_jump_keys(),
            attack: default_attack_keys(),
            block: default_block_keys(),
        }
    }
}

fn default_jump_keys() -> Vec<String> {
    vec!["SPACE".to_string(), "W".to_string()]
}

fn default_attack_keys() -> Vec<String> {
    vec!["J".to_string(), "POINTER_LEFT".to_string()]
}

fn default_block_keys() -> Vec<String> {
    vec!["K".to_string(), "POINTER_RIGHT".to_string()]
}

impl KeyBindings {
    /// Keys bound to an action
    pub fn keys(&self, action: InputAction) -> &[String] {
        match action {
            InputAction::Jump => &self.jump,
            InputAction::Attack => &self.attack,
            InputAction::Block => &self.block,
        }
    }

    /// Action bound to a key, checked in Jump, Attack, Block order
    pub fn action_for(&self, key: &str) -> Option<InputAction> {
        let key = key.trim();
        InputAction::all().iter().copied().find(|&action| {
            self.keys(action)
                .iter()
                .any(|bound| bound.eq_ignore_ascii_case(key))
        })
    }

    /// Human readable hint, e.g. `JUMP: SPACE/W`
    pub fn hint(&self) -> String {
        InputAction::all()
            .iter()
            .map(|&action| {
                format!(
                    "{}: {}",
                    format!("{:?}", action).to_ascii_uppercase(),
                    self.keys(action).join("/")
                )
            })
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for("SPACE"), Some(InputAction::Jump));
        assert_eq!(bindings.action_for("w"), Some(InputAction::Jump));
        assert_eq!(bindings.action_for("J"), Some(InputAction::Attack));
        assert_eq!(bindings.action_for("pointer_left"), Some(InputAction::Attack));
        assert_eq!(bindings.action_for("K"), Some(InputAction::Block));
        assert_eq!(bindings.action_for("ESC"), None);
    }

    #[test]
    fn test_parse_bindings() {
        let toml = r#"
jump = ["UP"]
block = ["L", "SHIFT"]
"#;
        let bindings: KeyBindings = toml::from_str(toml).unwrap();
        assert_eq!(bindings.action_for("up"), Some(InputAction::Jump));
        assert_eq!(bindings.action_for("SPACE"), None);
        assert_eq!(bindings.action_for("shift"), Some(InputAction::Block));
        assert_eq!(bindings.action_for("J"), Some(InputAction::Attack));
    }

    #[test]
    fn test_hint() {
        let hint = KeyBindings::default().hint();
        assert!(hint.starts_with("JUMP: SPACE/W"));
        assert!(hint.contains("BLOCK: K/POINTER_RIGHT"));
    }
}
