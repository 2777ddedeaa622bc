//! Input Module
//!
//! Per-frame input sampling for the character.
//!
//! # Example
//!
//! ```rust,ignore
//! use third_person_controller::input::{InputBindings, UserInput};
//! use winit::keyboard::KeyCode;
//!
//! let mut input = UserInput::new(InputBindings::new());
//! input.enable();
//!
//! input.handle_key(KeyCode::KeyW, true); // W pressed
//! let sample = input.sample();
//! assert_eq!(sample.move_axis.y, 1.0);
//! ```

pub mod bindings;
pub mod sample;
pub mod user_input;

pub use bindings::{InputBindings, KeyBinding, PlayerAction};
pub use sample::{ActionState, InputSample};
pub use user_input::UserInput;
