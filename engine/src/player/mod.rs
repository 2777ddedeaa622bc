//! Player Module
//!
//! Third-person character control.
//!
//! # Components
//!
//! - [`Player`] - Anything that consumes one frame of input (inert by default)
//! - [`PlayerMovement`] - Locomotion, jump/gravity, crouch, animation, audio and head look
//!   - Speed blends toward walk/run/crouch targets, yaw follows a camera-relative target
//!   - Jump and crouch are edge-triggered from previous-frame intents
//! - [`FootstepCaller`] - Forwards animation-timeline events to the movement audio
//! - [`FrameContext`] - Per-frame values supplied by the host (delta time, ground contact,
//!   camera yaw, head-look target)
//!
//! # Frame order
//!
//! ```rust,ignore
//! let frame = movement.frame(dt).with_camera_yaw(camera.yaw()).with_head_target(target);
//! user_input.tick(&mut movement, &frame); // apply_input: speed, turn, capsule move
//! movement.update(&frame);                // ground, jump/gravity, animator, head rig
//! ```

pub mod animation;
pub mod crouch;
pub mod footstep;
pub mod head_look;
pub mod jump;
pub mod movement;

use glam::Vec3;

use crate::host::CharacterCapsule;
use crate::input::InputSample;

pub use animation::{BASE_PARAM, CROUCH_PARAM, IN_AIR_PARAM, STANCE_PARAM};
pub use crouch::{CrouchState, Stance};
pub use footstep::{AnimationEvent, FootstepCaller, FootstepCycle};
pub use head_look::head_look_target_weight;
pub use jump::VerticalMotion;
pub use movement::{FOOTSTEP_MIN_SPEED, PlayerMovement};

/// Something that can consume one frame of input.
///
/// The default implementation ignores the input, so spectators or
/// cutscene stand-ins can be driven by the same sampler.
pub trait Player {
    fn apply_input(&mut self, _input: &InputSample, _frame: &FrameContext) {}
}

/// A player that ignores all input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePlayer;

impl Player for IdlePlayer {}

/// Values the host provides for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Ground contact reported by the capsule
    pub grounded: bool,
    /// Yaw of the camera root in degrees
    pub camera_yaw: f32,
    /// World position the head rig tries to look at
    pub head_target: Vec3,
}

impl FrameContext {
    /// A context with no ground contact, zero camera yaw and the target at the origin.
    pub fn new(delta_time: f32) -> Self {
        Self {
            delta_time,
            grounded: false,
            camera_yaw: 0.0,
            head_target: Vec3::ZERO,
        }
    }

    /// A context whose ground contact is read from `capsule`.
    pub fn capture<C: CharacterCapsule + ?Sized>(delta_time: f32, capsule: &C) -> Self {
        Self {
            grounded: capsule.is_grounded(),
            ..Self::new(delta_time)
        }
    }

    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    pub fn with_camera_yaw(mut self, camera_yaw: f32) -> Self {
        self.camera_yaw = camera_yaw;
        self
    }

    pub fn with_head_target(mut self, head_target: Vec3) -> Self {
        self.head_target = head_target;
        self
    }
}
