//! Footstep Audio
//!
//! The walk and run cycles carry authored timeline events. The host's
//! animation system reports them through a [`FootstepCaller`] borrowed from
//! the movement component for the duration of the dispatch.

use crate::host::CharacterHost;

use super::movement::PlayerMovement;

/// Cyclic index into the footstep clip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FootstepCycle {
    index: usize,
}

impl FootstepCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the clip that plays next.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the current index and step to the next one, wrapping after `len - 1`.
    ///
    /// `len` must be non-zero.
    pub fn advance(&mut self, len: usize) -> usize {
        let current = self.index.min(len.saturating_sub(1));
        self.index = if current + 1 >= len { 0 } else { current + 1 };
        current
    }
}

/// Timeline events authored on the locomotion clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A foot touched the ground during walk/run
    Footstep,
    /// The landing pose reached the ground
    Land,
}

impl AnimationEvent {
    /// Resolve an authored event name.
    ///
    /// Accepts the handler names (`OnFootstep`, `OnLand`) and the bare
    /// event names, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "onfootstep" | "footstep" => Some(AnimationEvent::Footstep),
            "onland" | "land" => Some(AnimationEvent::Land),
            _ => None,
        }
    }
}

/// Forwards animation events to the movement component's audio.
pub struct FootstepCaller<'a, H: CharacterHost> {
    movement: &'a mut PlayerMovement<H>,
}

impl<'a, H: CharacterHost> FootstepCaller<'a, H> {
    pub fn new(movement: &'a mut PlayerMovement<H>) -> Self {
        Self { movement }
    }

    /// Footstep event. Returns `true` if a clip played.
    pub fn on_footstep(&mut self) -> bool {
        self.movement.play_footstep()
    }

    /// Landing event.
    pub fn on_land(&mut self) {
        self.movement.play_land_clip();
    }

    pub fn handle(&mut self, event: AnimationEvent) {
        match event {
            AnimationEvent::Footstep => {
                self.on_footstep();
            }
            AnimationEvent::Land => self.on_land(),
        }
    }

    /// Dispatch an event by its authored name.
    ///
    /// Returns `false` for names this caller does not handle.
    pub fn dispatch(&mut self, name: &str) -> bool {
        match AnimationEvent::from_name(name) {
            Some(event) => {
                self.handle(event);
                true
            }
            None => {
                log::warn!("unhandled animation event '{name}'");
                false
            }
        }
    }
}
