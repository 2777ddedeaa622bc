//! Player Movement
//!
//! Third-person locomotion and vertical-motion state machine.
//!
//! # Movement Model
//!
//! - Target speed: 0 without input, crouched speed when crouched, run speed
//!   with the run intent, walk speed otherwise
//! - Current speed blends toward the target by `acceleration_time` per tick
//! - Target yaw is the input direction relative to the camera root; the
//!   character yaw damps toward it over `smooth_turn_time`
//! - Jump and crouch fire on the press edge only
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_controller::config::ControllerConfig;
//! use third_person_controller::host::SimulatedHost;
//! use third_person_controller::player::{Player, PlayerMovement};
//!
//! let mut movement = PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::new())?;
//!
//! // Each frame:
//! let frame = movement.frame(delta_time).with_camera_yaw(camera_yaw);
//! movement.apply_input(&sample, &frame);
//! movement.update(&frame);
//! ```

use glam::Vec3;

use crate::config::{ConfigError, ControllerConfig};
use crate::host::{CapsuleShape, CharacterHost};
use crate::input::InputSample;
use crate::math::{smooth_damp_angle, wrap_degrees, yaw_forward};

use super::animation::{LocomotionPose, drive_animator};
use super::crouch::{CrouchState, Stance};
use super::footstep::FootstepCycle;
use super::head_look::head_look_target_weight;
use super::jump::VerticalMotion;
use super::{FrameContext, Player};

/// Footsteps are silent below this horizontal speed (m/s)
pub const FOOTSTEP_MIN_SPEED: f32 = 0.1;

/// Locomotion, jump/gravity, crouch, animation, audio and head-look state
/// of one character, bound to its host.
#[derive(Debug)]
pub struct PlayerMovement<H: CharacterHost> {
    config: ControllerConfig,
    host: H,

    /// Smoothed horizontal speed in m/s
    current_speed: f32,

    /// Character yaw in degrees, `[0, 360)`
    yaw: f32,

    /// Yaw the character is turning toward, in degrees
    target_yaw: f32,

    /// Angular velocity carried by the yaw damping
    yaw_velocity: f32,

    /// Vertical velocity, jump cooldown and jump edge
    vertical: VerticalMotion,

    /// Ground contact from the last update
    grounded: bool,

    /// Crouch flag, edge detection and per-stance collider/FOV
    crouch: CrouchState,

    /// Strafe locomotion (no input drives it)
    strafe: bool,

    /// Next footstep clip
    footsteps: FootstepCycle,
}

impl<H: CharacterHost> PlayerMovement<H> {
    /// Validate `config`, bind to `host` and capture the standing collider
    /// and field-of-view baseline from it.
    pub fn activate(config: ControllerConfig, mut host: H) -> Result<Self, ConfigError> {
        config.validate()?;

        if let Some(name) = &config.animator_override {
            log::debug!("animator override '{name}'");
            host.set_controller_override(name);
        }

        let standing_shape = host.shape();
        let crouched_shape =
            CapsuleShape::new(config.crouch.crouched_height, config.crouch.crouched_center);
        let standing_fov = host.field_of_view();
        let crouched_fov = standing_fov - config.crouch.fov_delta;

        Ok(Self {
            crouch: CrouchState::new(standing_shape, crouched_shape, standing_fov, crouched_fov),
            config,
            host,
            current_speed: 0.0,
            yaw: 0.0,
            target_yaw: 0.0,
            yaw_velocity: 0.0,
            vertical: VerticalMotion::new(),
            grounded: false,
            strafe: false,
            footsteps: FootstepCycle::new(),
        })
    }

    /// Start facing `yaw` degrees.
    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = wrap_degrees(yaw);
        self.target_yaw = self.yaw;
        self
    }

    /// Frame context for this tick with ground contact read from the host capsule.
    pub fn frame(&self, delta_time: f32) -> FrameContext {
        FrameContext::capture(delta_time, &self.host)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Release the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Get the smoothed horizontal speed.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Get the character yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get the yaw the character is turning toward.
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Character forward direction.
    pub fn forward(&self) -> Vec3 {
        yaw_forward(self.yaw)
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical.velocity()
    }

    pub fn jump_cooldown(&self) -> f32 {
        self.vertical.cooldown()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_crouched(&self) -> bool {
        self.crouch.is_crouched()
    }

    pub fn stance(&self) -> Stance {
        self.crouch.stance()
    }

    pub fn is_strafing(&self) -> bool {
        self.strafe
    }

    pub fn set_strafe(&mut self, strafe: bool) {
        self.strafe = strafe;
    }

    /// Index of the footstep clip that plays next.
    pub fn footstep_index(&self) -> usize {
        self.footsteps.index()
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    fn locomotion(&mut self, input: &InputSample, frame: &FrameContext) {
        let movement = &self.config.movement;
        let dt = frame.delta_time;
        let magnitude = input.move_axis.length();
        let has_input = magnitude != 0.0;

        let target_speed = if !has_input {
            0.0
        } else if self.crouch.is_crouched() {
            movement.crouched_speed
        } else if input.run.pressed {
            movement.run_speed
        } else {
            movement.walk_speed
        };
        self.current_speed = self.config.smoothing.step(
            self.current_speed,
            target_speed,
            movement.acceleration_time,
            dt,
        );

        if has_input {
            self.target_yaw =
                input.move_axis.x.atan2(input.move_axis.y).to_degrees() + frame.camera_yaw;
            let yaw = smooth_damp_angle(
                self.yaw,
                self.target_yaw,
                &mut self.yaw_velocity,
                movement.smooth_turn_time,
                dt,
            );
            self.yaw = wrap_degrees(yaw);
        }

        let direction = yaw_forward(self.target_yaw);
        let horizontal = direction * magnitude * self.current_speed;
        let vertical = Vec3::Y * self.vertical.velocity();
        self.host.move_with_collision((horizontal + vertical) * dt);
    }

    fn switch_crouch(&mut self, crouch_pressed: bool) {
        if self.crouch.register_intent(crouch_pressed, self.grounded) {
            log::debug!("stance -> {:?}", self.crouch.stance());
        }
        if self.grounded {
            self.crouch.apply(&mut self.host);
        }
    }

    // ------------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------------

    /// Advance ground check, jump/gravity, animator parameters and head rig.
    ///
    /// Runs every frame whether or not input arrived.
    pub fn update(&mut self, frame: &FrameContext) {
        self.check_ground(frame);
        self.jump_and_gravity(frame.delta_time);
        self.play_animation(frame.delta_time);
        self.constrain_head(frame);
    }

    fn check_ground(&mut self, frame: &FrameContext) {
        if frame.grounded != self.grounded {
            if frame.grounded {
                log::debug!("landed at {:.2} m/s", self.vertical.velocity());
            } else {
                log::debug!("left ground");
            }
        }
        self.grounded = frame.grounded;
    }

    fn jump_and_gravity(&mut self, dt: f32) {
        let launched = self.vertical.step(self.grounded, dt, &self.config.jump);
        if launched {
            log::debug!("jump at {:.2} m/s", self.vertical.velocity());
            self.host.set_clip(&self.config.audio.jump_clip);
            self.host.play();
            self.crouch.force_stand();
            self.crouch.apply(&mut self.host);
        }
    }

    fn play_animation(&mut self, dt: f32) {
        let movement = &self.config.movement;
        let pose = LocomotionPose {
            grounded: self.grounded,
            crouched: self.crouch.is_crouched(),
            strafe: self.strafe,
            current_speed: self.current_speed,
            run_speed: movement.run_speed,
            crouched_speed: movement.crouched_speed,
        };
        drive_animator(
            &mut self.host,
            pose,
            self.config.smoothing,
            movement.acceleration_time,
            dt,
        );
    }

    fn constrain_head(&mut self, frame: &FrameContext) {
        if !self.grounded {
            return;
        }

        let head_look = &self.config.head_look;
        let target_weight = head_look_target_weight(
            self.forward(),
            self.host.position(),
            frame.head_target,
            head_look.look_angle,
        );
        if target_weight == 0.0 {
            log::trace!("head target behind character");
        }

        let weight = self.config.smoothing.step(
            self.host.rig_weight(),
            target_weight,
            head_look.blend,
            frame.delta_time,
        );
        self.host.set_rig_weight(weight);
    }

    // ------------------------------------------------------------------------
    // Audio
    // ------------------------------------------------------------------------

    /// Play the next footstep clip.
    ///
    /// Silent while airborne or slower than [`FOOTSTEP_MIN_SPEED`].
    /// Returns `true` if a clip played.
    pub fn play_footstep(&mut self) -> bool {
        if self.current_speed < FOOTSTEP_MIN_SPEED || !self.grounded {
            return false;
        }

        let clips = &self.config.audio.footstep_clips;
        let index = self.footsteps.advance(clips.len());
        self.host.set_clip(&clips[index]);
        self.host.play();
        true
    }

    /// Play the landing clip.
    pub fn play_land_clip(&mut self) {
        self.host.set_clip(&self.config.audio.land_clip);
        self.host.play();
    }
}

impl<H: CharacterHost> Player for PlayerMovement<H> {
    /// Locomotion runs immediately; jump and crouch are registered on their
    /// press edge.
    fn apply_input(&mut self, input: &InputSample, frame: &FrameContext) {
        self.locomotion(input, frame);
        if self.vertical.register_intent(input.jump.pressed) {
            log::trace!("jump requested");
        }
        self.switch_crouch(input.crouch.pressed);
    }
}
