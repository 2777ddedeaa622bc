//! Third-Person Demo - Headless Controller Run
//!
//! Run with: `cargo run --bin third_person_demo [config.json]`
//!
//! Drives a scripted input sequence through the controller on a flat-floor
//! simulated host and logs what the character does. Set `RUST_LOG=debug` to
//! see jump, land and crouch transitions, `RUST_LOG=trace` for every frame.
//!
//! Script (60 Hz):
//! - W: walk forward
//! - Shift: run
//! - Space: jump
//! - C: crouch, then stand back up
//! - Mouse: turn the camera 90 degrees right, the character follows

use glam::Vec3;
use log::info;
use winit::keyboard::KeyCode;

use third_person_controller::host::CharacterCapsule;
use third_person_controller::{
    CameraRoot, ConfigError, ControllerConfig, FootstepCaller, InputBindings, PlayerMovement,
    SimulatedHost, UserInput,
};

const TICK_RATE: f32 = 60.0;
const TOTAL_FRAMES: u32 = 660;
/// Frames between footstep events of the locomotion cycle
const FOOTSTEP_INTERVAL: u32 = 20;
/// Frames between state reports
const REPORT_INTERVAL: u32 = 30;

/// One scripted input event.
enum ScriptEvent {
    Key(KeyCode, bool),
    Mouse(f32, f32),
}

/// Input script as (frame, event), in frame order.
const SCRIPT: &[(u32, ScriptEvent)] = &[
    (10, ScriptEvent::Key(KeyCode::KeyW, true)),
    (120, ScriptEvent::Key(KeyCode::ShiftLeft, true)),
    (240, ScriptEvent::Key(KeyCode::Space, true)),
    (245, ScriptEvent::Key(KeyCode::Space, false)),
    (360, ScriptEvent::Key(KeyCode::ShiftLeft, false)),
    (400, ScriptEvent::Key(KeyCode::KeyC, true)),
    (405, ScriptEvent::Key(KeyCode::KeyC, false)),
    (480, ScriptEvent::Key(KeyCode::KeyC, true)),
    (485, ScriptEvent::Key(KeyCode::KeyC, false)),
    (540, ScriptEvent::Mouse(900.0, 0.0)),
    (600, ScriptEvent::Key(KeyCode::KeyW, false)),
];

fn load_config() -> Result<ControllerConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("loading config from {path}");
            ControllerConfig::load(path)
        }
        None => Ok(ControllerConfig::default()),
    }
}

fn run() -> Result<(), ConfigError> {
    let config = load_config()?;
    let mut movement = PlayerMovement::activate(config, SimulatedHost::new())?;
    let mut input = UserInput::new(InputBindings::new());
    let mut camera = CameraRoot::new();
    input.enable();

    let dt = 1.0 / TICK_RATE;
    let head_target = Vec3::new(0.0, 1.6, 20.0);
    let mut script = SCRIPT.iter().peekable();

    for frame_index in 0..TOTAL_FRAMES {
        while let Some((_, event)) = script.next_if(|(at, _)| *at == frame_index) {
            match *event {
                ScriptEvent::Key(key, pressed) => input.handle_key(key, pressed),
                ScriptEvent::Mouse(dx, dy) => input.handle_mouse_delta(dx, dy),
            }
        }

        let frame = movement
            .frame(dt)
            .with_camera_yaw(camera.yaw())
            .with_head_target(head_target);
        if let Some(sample) = input.tick(&mut movement, &frame) {
            camera.apply_look(sample.look_axis);
        }

        let was_grounded = movement.is_grounded();
        movement.update(&frame);

        // Animation events the locomotion clips would raise
        let mut caller = FootstepCaller::new(&mut movement);
        if !was_grounded && frame.grounded && frame_index > 0 {
            caller.dispatch("OnLand");
        }
        if frame_index % FOOTSTEP_INTERVAL == 0 {
            caller.dispatch("OnFootstep");
        }

        if frame_index % REPORT_INTERVAL == 0 {
            let position = movement.host().position();
            info!(
                "t={:5.2}s pos=({:6.2}, {:5.2}, {:6.2}) speed={:4.2} yaw={:6.1} vy={:6.2} {:?}{}",
                frame_index as f32 * dt,
                position.x,
                position.y,
                position.z,
                movement.current_speed(),
                movement.yaw(),
                movement.vertical_velocity(),
                movement.stance(),
                if movement.is_grounded() { "" } else { " airborne" },
            );
        }
    }

    let host = movement.into_host();
    let clips: Vec<&str> = host.played.iter().map(|clip| clip.name()).collect();
    info!("played {} clips: {}", clips.len(), clips.join(", "));
    info!("final camera yaw {:.1}", camera.yaw());
    Ok(())
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
