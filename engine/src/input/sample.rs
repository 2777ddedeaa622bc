//! Input Sample
//!
//! One frame of player input as handed to [`Player::apply_input`](crate::player::Player::apply_input).

use glam::Vec2;

/// State of a discrete action this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ActionState {
    /// Advance from the previous frame's state to `pressed`.
    pub fn next(self, pressed: bool) -> Self {
        Self {
            pressed,
            just_pressed: pressed && !self.pressed,
            just_released: !pressed && self.pressed,
        }
    }

    /// A held action with no transition this frame.
    pub fn held() -> Self {
        Self {
            pressed: true,
            ..Default::default()
        }
    }
}

/// Raw per-frame input: two axes and three actions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Movement axis, x = right, y = forward, length at most 1
    pub move_axis: Vec2,
    /// Look axis (mouse delta or right stick)
    pub look_axis: Vec2,
    pub run: ActionState,
    pub jump: ActionState,
    pub crouch: ActionState,
}

impl InputSample {
    /// A sample with only the movement axis set.
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            ..Default::default()
        }
    }

    /// Set the run action as held.
    pub fn running(mut self) -> Self {
        self.run = ActionState::held();
        self
    }

    /// Set the jump action as held.
    pub fn jumping(mut self) -> Self {
        self.jump = ActionState::held();
        self
    }

    /// Set the crouch action as held.
    pub fn crouching(mut self) -> Self {
        self.crouch = ActionState::held();
        self
    }
}
