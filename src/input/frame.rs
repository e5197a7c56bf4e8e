use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{ButtonRole, InputEvent, MouseButton};
use crate::options::ButtonBindings;

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Pointer position in pixels, origin bottom-left.
    pub pointer: Vec2,
    /// Scroll accumulated this frame, positive zooms in.
    pub zoom_delta: f32,
    /// A button bound to [`ButtonRole::Move`] is held.
    pub move_held: bool,
    /// A button bound to [`ButtonRole::Rotate`] is held.
    pub rotate_held: bool,
    /// Ctrl or command is held.
    pub orbit_modifier_held: bool,
    /// The pointer is over a UI element.
    pub over_ui: bool,
}

/// Folds [`InputEvent`]s into the state read by navigation each frame.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    bindings: ButtonBindings,
    pointer: Vec2,
    scroll: f32,
    left: bool,
    right: bool,
    middle: bool,
    ctrl: bool,
    command: bool,
    over_ui: bool,
}

impl InputTracker {
    /// Tracker using the given button roles.
    #[must_use]
    pub fn new(bindings: ButtonBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Replace the button roles.
    pub fn set_bindings(&mut self, bindings: ButtonBindings) {
        self.bindings = bindings;
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.pointer = Vec2::new(x, y),
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => self.left = pressed,
                MouseButton::Right => self.right = pressed,
                MouseButton::Middle => self.middle = pressed,
            },
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::ModifiersChanged { ctrl, command } => {
                self.ctrl = ctrl;
                self.command = command;
            }
            InputEvent::PointerOverUi { over } => self.over_ui = over,
        }
    }

    /// Snapshot for the current frame.
    #[must_use]
    pub fn frame(&self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            zoom_delta: self.scroll,
            move_held: self.role_held(ButtonRole::Move),
            rotate_held: self.role_held(ButtonRole::Rotate),
            orbit_modifier_held: self.ctrl || self.command,
            over_ui: self.over_ui,
        }
    }

    /// Clear per-frame accumulators.
    pub fn end_frame(&mut self) {
        self.scroll = 0.0;
    }

    fn role_held(&self, role: ButtonRole) -> bool {
        [
            (MouseButton::Left, self.left),
            (MouseButton::Right, self.right),
            (MouseButton::Middle, self.middle),
        ]
        .into_iter()
        .any(|(button, held)| held && self.bindings.role(button) == role)
    }
}
