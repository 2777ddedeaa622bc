//! Camera Root Module
//!
//! The pivot a third-person camera rig hangs off. Look input rotates the
//! pivot directly; its yaw is what camera-relative movement is measured
//! against.
//!
//! Key features:
//! - Look axis → yaw/pitch in degrees (no button required)
//! - Configurable sensitivity (default: 0.1 degrees per unit of look input)
//! - Pitch clamped to -40..70 degrees so the camera never dips under the
//!   character or flips over the top
//! - Yaw wrapped into [0, 360)

use glam::{Vec2, Vec3};

use crate::math::wrap_degrees;

/// Lowest pitch in degrees (looking down)
pub const PITCH_LIMIT_MIN: f32 = -40.0;
/// Highest pitch in degrees (looking up)
pub const PITCH_LIMIT_MAX: f32 = 70.0;

/// Third-person camera pivot.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = CameraRoot::new();
///
/// // Each frame, with the sampled look axis
/// camera.apply_look(sample.look_axis);
/// let frame = movement.frame(dt).with_camera_yaw(camera.yaw());
/// ```
#[derive(Clone, Debug)]
pub struct CameraRoot {
    /// Horizontal angle in degrees, 0 faces +Z
    pub yaw: f32,
    /// Vertical angle in degrees, clamped to pitch_limits
    pub pitch: f32,
    /// Degrees per unit of look input
    pub sensitivity: f32,
    /// Pitch limits (min, max) in degrees
    pitch_limits: (f32, f32),
}

impl Default for CameraRoot {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.1,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl CameraRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera root with custom sensitivity
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Create a camera root with custom pitch limits in degrees
    pub fn with_pitch_limits(min: f32, max: f32) -> Self {
        Self {
            pitch_limits: (min.min(max), max.max(min)),
            ..Default::default()
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the yaw directly (degrees, wrapped)
    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_degrees(yaw);
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch directly (degrees, clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        self.pitch_limits
    }

    /// Rotate the pivot by one frame of look input.
    ///
    /// # Arguments
    /// * `look` - Look axis. Positive x turns right (increases yaw),
    ///   positive y (mouse moved down) looks down (decreases pitch)
    pub fn apply_look(&mut self, look: Vec2) {
        self.yaw = wrap_degrees(self.yaw + look.x * self.sensitivity);
        self.set_pitch(self.pitch - look.y * self.sensitivity);
    }

    /// Direction the camera looks in, derived from yaw and pitch.
    ///
    /// Yaw 0 and pitch 0 look toward +Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos()).normalize()
    }

    /// Horizontal forward direction, ignoring pitch.
    #[inline]
    pub fn planar_forward(&self) -> Vec3 {
        crate::math::yaw_forward(self.yaw)
    }

    /// Reset orientation to default (looking toward +Z)
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
