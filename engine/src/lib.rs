//! Third-Person Controller Library
//!
//! A headless third-person character controller: camera-relative walking
//! and running, edge-triggered jump and crouch, gravity, animator parameter
//! driving, footstep audio and a procedural head-look weight.
//!
//! The embedding engine supplies physics, animation, camera lens and audio
//! through the [`host`] traits; everything else lives here.
//!
//! # Modules
//!
//! - [`player`] - `PlayerMovement`, `FootstepCaller` and the `Player` seam
//! - [`input`] - Key bindings and the per-frame `UserInput` sampler
//! - [`camera`] - Camera root yaw/pitch driven by look input
//! - [`host`] - Engine-facing traits and a flat-floor `SimulatedHost`
//! - [`config`] - Serde-backed tunables with validation
//! - [`math`] - Degree-based angle helpers and smoothing
//!
//! # Example
//!
//! ```ignore
//! use third_person_controller::{
//!     CameraRoot, ControllerConfig, InputBindings, PlayerMovement, SimulatedHost, UserInput,
//! };
//! use winit::keyboard::KeyCode;
//!
//! let mut movement = PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::new())?;
//! let mut input = UserInput::new(InputBindings::new());
//! let mut camera = CameraRoot::new();
//! input.enable();
//!
//! // Window events
//! input.handle_key(KeyCode::KeyW, true);
//!
//! // Each frame
//! let frame = movement.frame(dt).with_camera_yaw(camera.yaw());
//! if let Some(sample) = input.tick(&mut movement, &frame) {
//!     camera.apply_look(sample.look_axis);
//! }
//! movement.update(&frame);
//! ```

pub mod camera;
pub mod config;
pub mod host;
pub mod input;
pub mod math;
pub mod player;

// Re-export the types needed to wire a controller together
pub use camera::CameraRoot;
pub use config::{ConfigError, ControllerConfig};
pub use host::{CharacterHost, SimulatedHost};
pub use input::{InputBindings, InputSample, UserInput};
pub use player::{FootstepCaller, FrameContext, Player, PlayerMovement};
