//! Angle helpers
//!
//! All angles here are in degrees. Yaw turns from +Z toward +X, so a yaw of
//! 90 faces +X and the forward vector is `(sin(yaw), 0, cos(yaw))`.

use glam::Vec3;

/// Loop `t` into the range `[0, length]`.
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Wrap an angle into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Horizontal forward direction for a yaw angle.
#[inline]
pub fn yaw_forward(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Unsigned angle between two vectors in degrees (0..=180).
///
/// Returns 0 when either vector is (near) zero length.
pub fn angle_between(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }
    let dot = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    dot.acos().to_degrees()
}
