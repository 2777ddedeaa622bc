//! Simulated Host
//!
//! A headless [`CharacterHost`](super::CharacterHost) with a flat floor.
//! Used by the demo binary and by tests to observe exactly what the
//! controller asks of the engine.
//!
//! # Floor model
//!
//! - The floor is the plane `y = ground_height`
//! - A move that ends at or below the floor snaps onto it and grounds the capsule
//! - A move that ends above the floor leaves the capsule airborne

use std::collections::HashMap;

use glam::Vec3;

use super::{
    AnimatorParams, AudioClip, AudioOutput, CapsuleShape, CharacterCapsule, RigWeight,
    VirtualCamera,
};

/// Default capsule height in meters
pub const DEFAULT_CAPSULE_HEIGHT: f32 = 1.8;

/// Default camera field of view in degrees
pub const DEFAULT_FIELD_OF_VIEW: f32 = 60.0;

/// Flat-floor host recording every side effect requested by the controller.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    /// Character origin in world space
    pub position: Vec3,
    /// Height of the floor plane
    pub ground_height: f32,
    /// Result of the last ground test
    pub grounded: bool,
    /// Current collider dimensions
    pub shape: CapsuleShape,
    /// Displacement passed to the most recent move
    pub last_displacement: Vec3,
    /// Number of moves requested so far
    pub move_count: usize,

    /// Float animator parameters
    pub floats: HashMap<String, f32>,
    /// Bool animator parameters
    pub bools: HashMap<String, bool>,
    /// Animator override controller, if one was assigned
    pub controller_override: Option<String>,

    /// Camera lens field of view
    pub field_of_view: f32,

    /// Clip currently assigned to the audio source
    pub clip: Option<AudioClip>,
    /// Every clip that was played, in order
    pub played: Vec<AudioClip>,

    /// Head rig blend weight
    pub rig_weight: f32,
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ground_height: 0.0,
            grounded: true,
            shape: CapsuleShape::new(DEFAULT_CAPSULE_HEIGHT, Vec3::new(0.0, 0.93, 0.0)),
            last_displacement: Vec3::ZERO,
            move_count: 0,
            floats: HashMap::new(),
            bools: HashMap::new(),
            controller_override: None,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            clip: None,
            played: Vec::new(),
            rig_weight: 0.0,
        }
    }
}

impl SimulatedHost {
    /// Create a grounded host standing at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with the character lifted `height` meters above the floor.
    pub fn airborne(height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, 0.0),
            grounded: false,
            ..Default::default()
        }
    }

    /// Read a bool parameter, `None` if the controller never wrote it.
    pub fn bool_param(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    /// Read a float parameter, `None` if the controller never wrote it.
    pub fn float_param(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    /// How many times `clip` was played.
    pub fn play_count(&self, clip: &AudioClip) -> usize {
        self.played.iter().filter(|played| *played == clip).count()
    }

    /// Forget recorded audio.
    pub fn clear_audio(&mut self) {
        self.played.clear();
        self.clip = None;
    }
}

impl CharacterCapsule for SimulatedHost {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_with_collision(&mut self, displacement: Vec3) {
        self.last_displacement = displacement;
        self.move_count += 1;
        self.position += displacement;

        if self.position.y <= self.ground_height {
            self.position.y = self.ground_height;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn shape(&self) -> CapsuleShape {
        self.shape
    }

    fn set_shape(&mut self, shape: CapsuleShape) {
        self.shape = shape;
    }
}

impl AnimatorParams for SimulatedHost {
    fn float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_owned(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }

    fn set_controller_override(&mut self, name: &str) {
        self.controller_override = Some(name.to_owned());
    }
}

impl VirtualCamera for SimulatedHost {
    fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    fn set_field_of_view(&mut self, fov: f32) {
        self.field_of_view = fov;
    }
}

impl AudioOutput for SimulatedHost {
    fn set_clip(&mut self, clip: &AudioClip) {
        self.clip = Some(clip.clone());
    }

    fn play(&mut self) {
        if let Some(clip) = &self.clip {
            self.played.push(clip.clone());
        }
    }
}

impl RigWeight for SimulatedHost {
    fn rig_weight(&self) -> f32 {
        self.rig_weight
    }

    fn set_rig_weight(&mut self, weight: f32) {
        self.rig_weight = weight.clamp(0.0, 1.0);
    }
}
