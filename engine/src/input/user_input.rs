//! User Input Sampler
//!
//! Collects raw key, mouse and stick events between frames and, once per
//! tick, turns them into an [`InputSample`] forwarded to a [`Player`].
//! It never interprets the input: speed, turning, jump and crouch rules all
//! live in the player.
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_controller::input::{InputBindings, UserInput};
//!
//! let mut input = UserInput::new(InputBindings::new());
//! input.enable();
//!
//! // From the window event loop:
//! input.handle_key(KeyCode::KeyW, true);
//! input.handle_mouse_delta(dx, dy);
//!
//! // Each frame:
//! input.tick(&mut movement, &frame);
//! ```

use std::collections::HashSet;

use glam::Vec2;
use winit::keyboard::KeyCode;

use super::bindings::{InputBindings, PlayerAction};
use super::sample::{ActionState, InputSample};
use crate::player::{FrameContext, Player};

/// Polls the player action map once per frame.
#[derive(Debug, Clone)]
pub struct UserInput {
    bindings: InputBindings,
    enabled: bool,

    /// Physical keys currently held
    pressed_keys: HashSet<KeyCode>,
    /// Mouse movement accumulated since the last sample
    mouse_delta: Vec2,
    /// Analog move stick, overrides the keyboard composite when non-zero
    move_stick: Vec2,
    /// Analog look stick, added to the mouse delta
    look_stick: Vec2,

    run: ActionState,
    jump: ActionState,
    crouch: ActionState,
}

impl UserInput {
    /// Create a disabled sampler with the given bindings.
    pub fn new(bindings: InputBindings) -> Self {
        Self {
            bindings,
            enabled: false,
            pressed_keys: HashSet::new(),
            mouse_delta: Vec2::ZERO,
            move_stick: Vec2::ZERO,
            look_stick: Vec2::ZERO,
            run: ActionState::default(),
            jump: ActionState::default(),
            crouch: ActionState::default(),
        }
    }

    /// Start listening to the action map.
    pub fn enable(&mut self) {
        if !self.enabled {
            log::debug!("player input enabled");
        }
        self.enabled = true;
    }

    /// Stop listening and release everything that was held.
    pub fn disable(&mut self) {
        if self.enabled {
            log::debug!("player input disabled");
        }
        self.enabled = false;
        self.pressed_keys.clear();
        self.mouse_delta = Vec2::ZERO;
        self.move_stick = Vec2::ZERO;
        self.look_stick = Vec2::ZERO;
        self.run = ActionState::default();
        self.jump = ActionState::default();
        self.crouch = ActionState::default();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    /// Handle a key press or release. Ignored while disabled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.enabled {
            return;
        }
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    /// Accumulate raw mouse movement. Ignored while disabled.
    pub fn handle_mouse_delta(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Set the analog move stick position (clamped to unit length).
    pub fn set_move_stick(&mut self, stick: Vec2) {
        if self.enabled {
            self.move_stick = stick.clamp_length_max(1.0);
        }
    }

    /// Set the analog look stick position.
    pub fn set_look_stick(&mut self, stick: Vec2) {
        if self.enabled {
            self.look_stick = stick;
        }
    }

    fn action_pressed(&self, action: PlayerAction) -> bool {
        self.bindings.is_action_pressed(action, &self.pressed_keys)
    }

    /// Keyboard composite for the move axis, normalized so diagonals are not faster.
    fn keyboard_move_axis(&self) -> Vec2 {
        let axis = |positive: PlayerAction, negative: PlayerAction| {
            (self.action_pressed(positive) as i32 - self.action_pressed(negative) as i32) as f32
        };
        Vec2::new(
            axis(PlayerAction::MoveRight, PlayerAction::MoveLeft),
            axis(PlayerAction::MoveForward, PlayerAction::MoveBack),
        )
        .normalize_or_zero()
    }

    /// Read this frame's values and advance the per-action transitions.
    ///
    /// Returns a neutral sample while disabled. The accumulated mouse delta
    /// is consumed.
    pub fn sample(&mut self) -> InputSample {
        if !self.enabled {
            return InputSample::default();
        }

        let move_axis = if self.move_stick != Vec2::ZERO {
            self.move_stick
        } else {
            self.keyboard_move_axis()
        };
        let look_axis = self.mouse_delta + self.look_stick;
        self.mouse_delta = Vec2::ZERO;

        self.run = self.run.next(self.action_pressed(PlayerAction::Sprint));
        self.jump = self.jump.next(self.action_pressed(PlayerAction::Jump));
        self.crouch = self.crouch.next(self.action_pressed(PlayerAction::Crouch));

        InputSample {
            move_axis,
            look_axis,
            run: self.run,
            jump: self.jump,
            crouch: self.crouch,
        }
    }

    /// Sample once and forward to `player`.
    ///
    /// Returns the forwarded sample, or `None` while disabled.
    pub fn tick(&mut self, player: &mut dyn Player, frame: &FrameContext) -> Option<InputSample> {
        if !self.enabled {
            return None;
        }
        let sample = self.sample();
        log::trace!("input {:?}", sample);
        player.apply_input(&sample, frame);
        Some(sample)
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self::new(InputBindings::new())
    }
}
