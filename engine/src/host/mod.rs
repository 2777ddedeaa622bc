//! Host Module
//!
//! The controller never owns a physics engine, an animation graph, a camera
//! lens or an audio mixer. It talks to the embedding engine through the
//! small traits below, bundled as [`CharacterHost`].
//!
//! # Traits
//!
//! - [`CharacterCapsule`] - Ground test and collide-and-slide move primitive
//! - [`AnimatorParams`] - Named float/bool animation parameters
//! - [`VirtualCamera`] - Mutable field-of-view of the follow camera
//! - [`AudioOutput`] - "Set clip, play" audio source
//! - [`RigWeight`] - Blend weight of the procedural head-aim rig
//!
//! [`SimulatedHost`] implements all of them over a flat floor so the
//! controller can run headless.

pub mod simulated;

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use simulated::SimulatedHost;

/// Collider dimensions of the character capsule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapsuleShape {
    /// Total capsule height in meters
    pub height: f32,
    /// Capsule center relative to the character origin
    pub center: Vec3,
}

impl CapsuleShape {
    pub fn new(height: f32, center: Vec3) -> Self {
        Self { height, center }
    }
}

/// Handle to an audio asset, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioClip(String);

impl AudioClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AudioClip {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Character collision capsule provided by the host physics.
pub trait CharacterCapsule {
    /// Whether the last move ended in contact with walkable ground.
    fn is_grounded(&self) -> bool;

    /// Move by `displacement`, letting the host resolve collisions.
    fn move_with_collision(&mut self, displacement: Vec3);

    /// World position of the character origin.
    fn position(&self) -> Vec3;

    fn shape(&self) -> CapsuleShape;

    fn set_shape(&mut self, shape: CapsuleShape);
}

/// Parameter set of the skeletal animator.
pub trait AnimatorParams {
    /// Current value of a float parameter (0 when unset).
    fn float(&self, name: &str) -> f32;

    fn set_float(&mut self, name: &str, value: f32);

    fn set_bool(&mut self, name: &str, value: bool);

    /// Swap in an override controller by name. Hosts without overrides ignore it.
    fn set_controller_override(&mut self, _name: &str) {}
}

/// Lens of the follow camera.
pub trait VirtualCamera {
    /// Vertical field of view in degrees.
    fn field_of_view(&self) -> f32;

    fn set_field_of_view(&mut self, fov: f32);
}

/// Single-voice audio source. Assigning a clip replaces the previous one.
pub trait AudioOutput {
    fn set_clip(&mut self, clip: &AudioClip);

    fn play(&mut self);
}

/// Procedural head-aim rig.
pub trait RigWeight {
    /// Blend weight in `[0, 1]`.
    fn rig_weight(&self) -> f32;

    fn set_rig_weight(&mut self, weight: f32);
}

/// Everything the movement component needs from the host engine.
pub trait CharacterHost:
    CharacterCapsule + AnimatorParams + VirtualCamera + AudioOutput + RigWeight
{
}

impl<T> CharacterHost for T where
    T: CharacterCapsule + AnimatorParams + VirtualCamera + AudioOutput + RigWeight
{
}
