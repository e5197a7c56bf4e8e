//! Input handling: platform-agnostic events and the tracker that turns
//! them into per-frame navigation input.

/// Platform-agnostic input events.
pub mod event;
mod frame;

pub use event::{ButtonRole, InputEvent, MouseButton};
pub use frame::{FrameInput, InputTracker};
