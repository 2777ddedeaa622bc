//! Player Crouch State
//!
//! Toggle-based stance management. Each stance has a collider shape and a
//! camera field of view captured when the character is activated.
//!
//! # Rules
//!
//! - Crouch toggles on the key-down edge only; holding the key never re-toggles
//! - A toggle is accepted only while grounded; presses in the air are swallowed
//! - The shape and FOV of the current stance are re-applied on every grounded
//!   input frame, so the host cannot drift away from them
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_controller::player::CrouchState;
//!
//! let mut crouch = CrouchState::new(standing_shape, crouched_shape, 60.0, 55.0);
//!
//! // Each input frame:
//! crouch.register_intent(crouch_pressed, grounded);
//! if grounded {
//!     crouch.apply(&mut host);
//! }
//! ```

use crate::host::{CapsuleShape, CharacterCapsule, VirtualCamera};

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Standing upright with the authored collider
    #[default]
    Standing,
    /// Crouched with the shorter collider and narrower FOV
    Crouching,
}

impl Stance {
    /// The other stance.
    pub fn toggled(self) -> Self {
        match self {
            Stance::Standing => Stance::Crouching,
            Stance::Crouching => Stance::Standing,
        }
    }
}

/// Crouch flag plus the per-stance collider and FOV values.
#[derive(Debug, Clone, PartialEq)]
pub struct CrouchState {
    /// Current stance
    stance: Stance,

    /// Collider while standing (captured from the host)
    standing_shape: CapsuleShape,

    /// Collider while crouched (from configuration)
    crouched_shape: CapsuleShape,

    /// Field of view while standing (captured from the host)
    standing_fov: f32,

    /// Field of view while crouched
    crouched_fov: f32,

    /// Whether crouch input was pressed last frame (for toggle detection)
    was_crouch_pressed: bool,
}

impl CrouchState {
    /// Create a standing crouch state.
    pub fn new(
        standing_shape: CapsuleShape,
        crouched_shape: CapsuleShape,
        standing_fov: f32,
        crouched_fov: f32,
    ) -> Self {
        Self {
            stance: Stance::Standing,
            standing_shape,
            crouched_shape,
            standing_fov,
            crouched_fov,
            was_crouch_pressed: false,
        }
    }

    /// Get the current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_crouched(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Collider for the current stance.
    pub fn shape(&self) -> CapsuleShape {
        match self.stance {
            Stance::Standing => self.standing_shape,
            Stance::Crouching => self.crouched_shape,
        }
    }

    /// Field of view for the current stance.
    pub fn field_of_view(&self) -> f32 {
        match self.stance {
            Stance::Standing => self.standing_fov,
            Stance::Crouching => self.crouched_fov,
        }
    }

    /// Feed this frame's crouch intent.
    ///
    /// Returns `true` if the stance flipped.
    pub fn register_intent(&mut self, crouch_pressed: bool, grounded: bool) -> bool {
        let edge = crouch_pressed && !self.was_crouch_pressed;
        self.was_crouch_pressed = crouch_pressed;

        if edge && grounded {
            self.stance = self.stance.toggled();
            true
        } else {
            false
        }
    }

    /// Leave the crouch without touching the edge detector.
    pub fn force_stand(&mut self) {
        self.stance = Stance::Standing;
    }

    /// Push the current stance's collider and FOV to the host.
    pub fn apply<H>(&self, host: &mut H)
    where
        H: CharacterCapsule + VirtualCamera + ?Sized,
    {
        host.set_shape(self.shape());
        host.set_field_of_view(self.field_of_view());
    }
}
