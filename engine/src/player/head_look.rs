//! Head Look
//!
//! The head-aim rig is faded in while the look target sits inside a cone in
//! front of the character and faded out once it moves behind.

use glam::Vec3;

use crate::math::angle_between;

/// Rig weight to blend toward: 1 inside the look cone, 0 outside.
///
/// # Arguments
/// * `forward` - Character forward direction
/// * `position` - Character position
/// * `target` - Look target position
/// * `look_angle` - Full cone angle in degrees; each side gets half
pub fn head_look_target_weight(
    forward: Vec3,
    position: Vec3,
    target: Vec3,
    look_angle: f32,
) -> f32 {
    let to_target = target - position;
    if angle_between(forward, to_target) <= look_angle / 2.0 {
        1.0
    } else {
        0.0
    }
}
