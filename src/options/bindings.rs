use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::{ButtonRole, MouseButton};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Bindings", inline)]
#[serde(default)]
/// Mouse button roles.
pub struct ButtonBindings {
    /// Role of the left button.
    pub left: ButtonRole,
    /// Role of the right button.
    pub right: ButtonRole,
    /// Role of the middle button.
    pub middle: ButtonRole,
}

impl Default for ButtonBindings {
    fn default() -> Self {
        Self {
            left: ButtonRole::Move,
            right: ButtonRole::Rotate,
            middle: ButtonRole::Rotate,
        }
    }
}

impl ButtonBindings {
    /// Role bound to a physical button.
    #[must_use]
    pub fn role(&self, button: MouseButton) -> ButtonRole {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }
}
