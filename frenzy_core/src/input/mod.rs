//! Input buffering - Remembers early inputs for a short window

mod bindings;
mod buffer;

pub use bindings::KeyBindings;
pub use buffer::{BufferedInput, InputBuffer};

use serde::{Deserialize, Serialize};

/// Player intent coming from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    Jump,
    Attack,
    Block,
}

impl InputAction {
    /// Get all actions
    pub fn all() -> &'static [InputAction] {
        &[InputAction::Jump, InputAction::Attack, InputAction::Block]
    }
}
