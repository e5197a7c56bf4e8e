use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are folded into a [`FrameInput`](super::FrameInput) by an
/// [`InputTracker`](super::InputTracker). Positions use the host screen
/// convention: physical pixels with the origin at the bottom-left.
///
/// # Example
///
/// ```
/// use terranav::input::{InputEvent, InputTracker, MouseButton};
///
/// let mut tracker = InputTracker::default();
/// tracker.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// tracker.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// assert!(tracker.frame().move_held);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, from the bottom edge.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount accumulated since the last event.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether a control key is held.
        #[serde(default)]
        ctrl: bool,
        /// Whether the command (super) key is held.
        #[serde(default)]
        command: bool,
    },
    /// The pointer entered or left a UI element.
    PointerOverUi {
        /// Whether the pointer is over UI.
        over: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// What a held mouse button asks the camera to do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    /// Pan, or orbit with the orbit modifier.
    Move,
    /// Orbit around the picked point.
    Rotate,
    /// Ignored by navigation.
    None,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for InputEvent {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self::ModifiersChanged {
            ctrl: state.control_key(),
            command: state.super_key(),
        }
    }
}
