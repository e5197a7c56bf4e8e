// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Grid math converts between f32 and i32 on purpose
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
// Tests assert with unwrap/panic
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Free-form camera navigation and terrain picking for voxel city-builder
//! hosts.
//!
//! The crate never owns the camera or the world. A host exposes its camera
//! fields, terrain voxels, selectable objects and water state through the
//! traits in [`host`]; terranav turns pointer input into pan, orbit and
//! zoom-to-cursor and writes the result back to the host camera.
//!
//! # Key entry points
//!
//! - [`navigation::Navigator`] - the pointer-driven state machine
//! - [`navigation::NavigationPlugin`] - a navigator bound to a host
//! - [`picking::RayPicker`] - world point under a ray (terrain vs.
//!   selectable vs. ground plane)
//! - [`camera::CameraState`] - distance, rotation and eye position over the
//!   host camera fields, with the inverse solve from eye to target
//! - [`options::Options`] - tunables with TOML preset support
//!
//! # Architecture
//!
//! Everything runs synchronously inside the host's input tick. Each tick
//! the navigator casts the pointer ray, resolves the world point, advances
//! the current gesture from its start snapshot and applies zoom. The
//! [`host::simulated`] host and the [`replay`] module let the whole
//! pipeline run headless.

pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod replay;
