//! Math Module
//!
//! Interpolation and angle helpers shared by the controller, the camera root
//! and the simulated host.
//!
//! # Conventions
//!
//! - **1 unit = 1 meter**, time in seconds
//! - +Y is up, yaw 0 faces +Z
//! - Yaw is measured in degrees, turning from +Z toward +X
//!
//! # Submodules
//!
//! - [`angles`] - Degree-based yaw helpers (wrapping, delta, forward vectors)
//! - [`smoothing`] - Lerp toward a target and SmoothDamp-style critically damped springs

pub mod angles;
pub mod smoothing;

pub use angles::{angle_between, delta_angle, repeat, wrap_degrees, yaw_forward};
pub use smoothing::{Smoothing, lerp, smooth_damp, smooth_damp_angle};

// Re-export the glam types used across the crate
pub use glam::{Vec2, Vec3};
