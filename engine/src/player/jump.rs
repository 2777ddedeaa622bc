//! Jump and Gravity
//!
//! Vertical motion as a two-state machine driven by the ground check of
//! each tick:
//!
//! - **Grounded**: the jump cooldown decays toward zero. A pending jump with
//!   no cooldown launches at `sqrt(jump_height * -2 * gravity)`; otherwise
//!   a downward velocity is pinned to `grounded_velocity` to keep the
//!   capsule seated.
//! - **Airborne**: the cooldown is held at `jump_timeout` and velocity
//!   integrates gravity, clamped to the terminal velocity.
//!
//! Jump requests come from the input edge (press, not hold) and are
//! consumed by the next step whether or not they launch.

use crate::config::JumpConfig;

/// Vertical velocity, jump cooldown and jump edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalMotion {
    /// Vertical velocity in m/s (positive = up)
    velocity: f32,
    /// Seconds before the next jump is allowed
    cooldown: f32,
    /// Jump input held last input frame
    was_jump_pressed: bool,
    /// A press edge was seen since the last step
    pending_jump: bool,
}

impl VerticalMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn has_pending_jump(&self) -> bool {
        self.pending_jump
    }

    /// Feed this frame's jump intent; a press edge queues one jump.
    ///
    /// Returns `true` when this call queued the jump.
    pub fn register_intent(&mut self, jump_pressed: bool) -> bool {
        let edge = jump_pressed && !self.was_jump_pressed;
        self.was_jump_pressed = jump_pressed;
        if edge {
            self.pending_jump = true;
        }
        edge
    }

    /// Advance one tick. Returns `true` if the character launched.
    pub fn step(&mut self, grounded: bool, dt: f32, config: &JumpConfig) -> bool {
        let launched = if grounded {
            self.cooldown = (self.cooldown - dt).max(0.0);

            let launch = self.pending_jump && self.cooldown <= 0.0;
            if launch {
                self.velocity = config.launch_velocity();
            }
            if self.velocity <= 0.0 {
                self.velocity = config.grounded_velocity;
            }
            launch
        } else {
            self.cooldown = config.jump_timeout;
            let terminal = config.terminal_velocity;
            self.velocity = (self.velocity + config.gravity * dt).clamp(-terminal, terminal);
            false
        };

        self.pending_jump = false;
        launched
    }
}
