//! Controller Configuration
//!
//! Static per-instance tunables, grouped the way they are authored:
//! movement, jump/gravity, crouch, audio and head look.
//!
//! Missing JSON fields fall back to their defaults, so a file only needs to
//! list what it changes:
//!
//! ```json
//! { "movement": { "run_speed": 6.0 }, "smoothing": "frame_rate_independent" }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::host::AudioClip;
use crate::math::Smoothing;

// ============================================================================
// SECTIONS
// ============================================================================

/// Horizontal locomotion tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Time in seconds for the character yaw to catch up with the target yaw
    pub smooth_turn_time: f32,
    /// Walking speed in m/s
    pub walk_speed: f32,
    /// Running speed in m/s (run intent held, standing)
    pub run_speed: f32,
    /// Speed in m/s while crouched
    pub crouched_speed: f32,
    /// Blend factor toward the target speed applied per tick.
    /// Also used for the stance animation blend.
    pub acceleration_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            smooth_turn_time: 0.2,
            walk_speed: 2.33,
            run_speed: 5.33,
            crouched_speed: 1.33,
            acceleration_time: 0.33,
        }
    }
}

/// Jump and gravity tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Seconds on the ground after landing before another jump is allowed
    pub jump_timeout: f32,
    /// Vertical acceleration in m/s^2 (negative = down)
    pub gravity: f32,
    /// Apex height of a jump in meters
    pub jump_height: f32,
    /// Maximum vertical speed magnitude while airborne in m/s
    pub terminal_velocity: f32,
    /// Vertical velocity held while grounded to keep the capsule seated
    pub grounded_velocity: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            jump_timeout: 1.0,
            gravity: -15.0,
            jump_height: 1.5,
            terminal_velocity: 53.0,
            grounded_velocity: -2.0,
        }
    }
}

impl JumpConfig {
    /// Launch speed reaching `jump_height` under `gravity`.
    pub fn launch_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }
}

/// Crouch collider and camera tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchConfig {
    /// Capsule height while crouched
    pub crouched_height: f32,
    /// Capsule center while crouched
    pub crouched_center: Vec3,
    /// Degrees removed from the baseline field of view while crouched
    pub fov_delta: f32,
}

impl Default for CrouchConfig {
    fn default() -> Self {
        Self {
            crouched_height: 1.16,
            crouched_center: Vec3::new(0.0, 0.58, 0.0),
            fov_delta: 5.0,
        }
    }
}

/// Footstep, jump and landing clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Played in order, wrapping back to the first
    pub footstep_clips: Vec<AudioClip>,
    pub jump_clip: AudioClip,
    pub land_clip: AudioClip,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            footstep_clips: (1..=4)
                .map(|i| AudioClip::new(format!("footstep_{i:02}")))
                .collect(),
            jump_clip: AudioClip::new("jump"),
            land_clip: AudioClip::new("land"),
        }
    }
}

/// Procedural head-look tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadLookConfig {
    /// Total look cone in degrees; each side gets half
    pub look_angle: f32,
    /// Blend factor of the rig weight per tick
    pub blend: f32,
}

impl Default for HeadLookConfig {
    fn default() -> Self {
        Self {
            look_angle: 210.0,
            blend: 0.4,
        }
    }
}

// ============================================================================
// CONTROLLER CONFIG
// ============================================================================

/// Complete controller configuration.
///
/// # Example
///
/// ```ignore
/// use third_person_controller::config::ControllerConfig;
///
/// let config = ControllerConfig {
///     smoothing: Smoothing::FrameRateIndependent,
///     ..ControllerConfig::default()
/// };
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub crouch: CrouchConfig,
    pub audio: AudioConfig,
    pub head_look: HeadLookConfig,
    /// How blend factors are applied (per tick or frame-rate independent)
    pub smoothing: Smoothing,
    /// Animator override controller applied at activation
    pub animator_override: Option<String>,
}

impl ControllerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let movement = &self.movement;
        positive("movement.smooth_turn_time", movement.smooth_turn_time)?;
        positive("movement.walk_speed", movement.walk_speed)?;
        // Animation ratios divide by these two
        positive("movement.run_speed", movement.run_speed)?;
        positive("movement.crouched_speed", movement.crouched_speed)?;
        positive("movement.acceleration_time", movement.acceleration_time)?;

        let jump = &self.jump;
        non_negative("jump.jump_timeout", jump.jump_timeout)?;
        non_negative("jump.jump_height", jump.jump_height)?;
        positive("jump.terminal_velocity", jump.terminal_velocity)?;
        if !(jump.gravity < 0.0) {
            return Err(ConfigError::invalid("jump.gravity", "must be negative (pointing down)"));
        }
        if !(jump.grounded_velocity <= 0.0) {
            return Err(ConfigError::invalid("jump.grounded_velocity", "must not point upward"));
        }

        positive("crouch.crouched_height", self.crouch.crouched_height)?;
        if !self.crouch.crouched_center.is_finite() {
            return Err(ConfigError::invalid("crouch.crouched_center", "must be finite"));
        }
        if !self.crouch.fov_delta.is_finite() {
            return Err(ConfigError::invalid("crouch.fov_delta", "must be finite"));
        }

        if self.audio.footstep_clips.is_empty() {
            return Err(ConfigError::invalid(
                "audio.footstep_clips",
                "at least one footstep clip is required",
            ));
        }

        let head = &self.head_look;
        if !(0.0..=360.0).contains(&head.look_angle) {
            return Err(ConfigError::invalid("head_look.look_angle", "must be within 0..=360"));
        }
        if !(0.0..=1.0).contains(&head.blend) {
            return Err(ConfigError::invalid("head_look.blend", "must be within 0..=1"));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must not be negative, got {value}")))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// A value is outside the range the controller accepts.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
