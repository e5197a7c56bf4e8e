//! Pointer-driven free camera: pan, orbit around the picked point, and
//! zoom toward the cursor.
//!
//! [`Navigator`] is the state machine; [`NavigationPlugin`] binds it to a
//! [`Host`](crate::host::Host) and plugs into the host's input dispatch.

mod crosshair;
mod gesture;
mod navigator;
mod plugin;

pub use crosshair::Crosshair;
pub use gesture::{Gesture, NavMode, OrbitGesture, PanGesture};
pub use navigator::Navigator;
pub use plugin::{InputDispatcher, InputProcessor, NavigationPlugin};
