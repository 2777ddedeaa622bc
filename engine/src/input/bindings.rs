//! Input Bindings Module
//!
//! Maps physical keys to the logical actions the character understands.
//! Several keys may drive the same action (WASD and the arrow keys both
//! move), but each key drives at most one action.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// Logical actions of the player action map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Move axis +Y (default: W, ArrowUp)
    MoveForward,
    /// Move axis -Y (default: S, ArrowDown)
    MoveBack,
    /// Move axis -X (default: A, ArrowLeft)
    MoveLeft,
    /// Move axis +X (default: D, ArrowRight)
    MoveRight,
    /// Run modifier (default: Left Shift)
    Sprint,
    /// Jump (default: Space)
    Jump,
    /// Crouch toggle (default: C)
    Crouch,
}

/// One key-to-action pair, the serialized form of [`InputBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub action: PlayerAction,
}

/// Maps physical keys to logical actions, supporting remapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<KeyBinding>", into = "Vec<KeyBinding>")]
pub struct InputBindings {
    key_to_action: HashMap<KeyCode, PlayerAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBindings {
    /// Create bindings with the default layout.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Shift (Left) = Sprint
    /// - Space = Jump
    /// - C = Crouch
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::KeyW, PlayerAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, PlayerAction::MoveForward);
        bindings.bind(KeyCode::KeyS, PlayerAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, PlayerAction::MoveBack);
        bindings.bind(KeyCode::KeyA, PlayerAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, PlayerAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, PlayerAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, PlayerAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, PlayerAction::Sprint);
        bindings.bind(KeyCode::Space, PlayerAction::Jump);
        bindings.bind(KeyCode::KeyC, PlayerAction::Crouch);

        bindings
    }

    /// Create bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is replaced.
    /// Other keys bound to the same action keep working.
    pub fn bind(&mut self, key: KeyCode, action: PlayerAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Remove every key bound to a specific action.
    pub fn unbind_action(&mut self, action: PlayerAction) {
        self.key_to_action.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<PlayerAction> {
        self.key_to_action.get(&key).copied()
    }

    /// All keys bound to a logical action, in no particular order.
    pub fn keys_for(&self, action: PlayerAction) -> Vec<KeyCode> {
        self.key_to_action
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Check if an action is pressed, given the set of held keys.
    pub fn is_action_pressed(&self, action: PlayerAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        pressed_keys
            .iter()
            .any(|key| self.get_action(*key) == Some(action))
    }

    /// Get all current bindings as key-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, PlayerAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}

impl From<Vec<KeyBinding>> for InputBindings {
    fn from(list: Vec<KeyBinding>) -> Self {
        let mut bindings = Self::empty();
        for KeyBinding { key, action } in list {
            bindings.bind(key, action);
        }
        bindings
    }
}

impl From<InputBindings> for Vec<KeyBinding> {
    fn from(bindings: InputBindings) -> Self {
        bindings
            .all_bindings()
            .map(|(key, action)| KeyBinding { key, action })
            .collect()
    }
}
