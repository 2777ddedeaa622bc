//! Camera Module
//!
//! Camera pivot state for the third-person rig. This module is window-system
//! agnostic - it only deals with camera angles and math.

pub mod orbit_root;

pub use orbit_root::{CameraRoot, PITCH_LIMIT_MAX, PITCH_LIMIT_MIN};
