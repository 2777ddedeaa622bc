//! Controller Tests - End-to-End Movement on the Simulated Host
//!
//! Drives `PlayerMovement` frame by frame the way an engine would: capture
//! the frame context, apply input, then tick.

use glam::{Vec2, Vec3};
use third_person_controller::config::ControllerConfig;
use third_person_controller::host::{AudioClip, CapsuleShape, SimulatedHost};
use third_person_controller::input::InputSample;
use third_person_controller::player::{
    BASE_PARAM, CROUCH_PARAM, FootstepCaller, IN_AIR_PARAM, Player, PlayerMovement, STANCE_PARAM,
    Stance,
};

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn spawn() -> PlayerMovement<SimulatedHost> {
    PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::new()).unwrap()
}

fn step(movement: &mut PlayerMovement<SimulatedHost>, input: InputSample) {
    let frame = movement.frame(DT);
    movement.apply_input(&input, &frame);
    movement.update(&frame);
}

/// Spawned and settled on the floor.
fn spawn_grounded() -> PlayerMovement<SimulatedHost> {
    let mut movement = spawn();
    step(&mut movement, InputSample::default());
    movement
}

fn jump_clip() -> AudioClip {
    AudioClip::new("jump")
}

// ============================================================================
// Locomotion
// ============================================================================

#[test]
fn test_walk_forward_converges_to_walk_speed() {
    let mut movement = spawn_grounded();

    for _ in 0..90 {
        step(&mut movement, InputSample::moving(Vec2::new(0.0, 1.0)));
    }

    assert!(approx_eq(movement.current_speed(), 2.33));
    // Last frame covered walk_speed * dt along +Z
    let displacement = movement.host().last_displacement;
    assert!(approx_eq(displacement.z, 2.33 * DT));
    assert_eq!(displacement.x, 0.0);
}

#[test]
fn test_camera_yaw_rotates_movement() {
    let mut movement = spawn_grounded();

    for _ in 0..120 {
        let frame = movement.frame(DT).with_camera_yaw(90.0);
        movement.apply_input(&InputSample::moving(Vec2::Y), &frame);
        movement.update(&frame);
    }

    // Forward relative to a camera facing +X moves along +X
    let position = movement.host().position;
    assert!(position.x > 1.0);
    assert!(position.z.abs() < EPSILON);
    assert!((movement.yaw() - 90.0).abs() < 0.1);
}

#[test]
fn test_turn_takes_shortest_path() {
    let mut movement = spawn_grounded().with_yaw(350.0);

    let frame = movement.frame(DT);
    movement.apply_input(&InputSample::moving(Vec2::Y), &frame);

    // 350 -> 0 turns through 360, never back through 180
    let yaw = movement.yaw();
    assert!(yaw > 350.0 || yaw < 1.0);
}

#[test]
fn test_half_stick_moves_at_half_rate() {
    let mut full = spawn_grounded();
    let mut half = spawn_grounded();

    for _ in 0..60 {
        step(&mut full, InputSample::moving(Vec2::Y));
        step(&mut half, InputSample::moving(Vec2::Y * 0.5));
    }

    // Speed targets ignore magnitude, displacement scales with it
    assert!(approx_eq(full.current_speed(), half.current_speed()));
    assert!(approx_eq(
        half.host().last_displacement.z * 2.0,
        full.host().last_displacement.z
    ));
}

// ============================================================================
// Jump and gravity
// ============================================================================

#[test]
fn test_jump_launch_velocity_is_exact() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().jumping());

    let expected = (1.5f32 * 2.0 * 15.0).sqrt();
    assert_eq!(movement.vertical_velocity(), expected);
}

#[test]
fn test_held_jump_fires_once() {
    let mut movement = spawn_grounded();

    // Hold jump through launch, flight, landing and the full cooldown
    for _ in 0..300 {
        step(&mut movement, InputSample::default().jumping());
    }

    assert!(movement.is_grounded());
    assert_eq!(movement.host().play_count(&jump_clip()), 1);
}

#[test]
fn test_jump_arc_lands_back_on_floor() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().jumping());

    let mut apex: f32 = 0.0;
    let mut airborne_frames = 0;
    for _ in 0..120 {
        step(&mut movement, InputSample::default());
        apex = apex.max(movement.host().position.y);
        if !movement.is_grounded() {
            airborne_frames += 1;
        }
    }

    assert!(movement.is_grounded());
    assert_eq!(movement.host().position.y, 0.0);
    assert!(airborne_frames > 0);
    // Discrete integration overshoots the analytic 1.5 m apex slightly
    assert!(apex > 1.5 && apex < 1.8);
}

#[test]
fn test_jump_cooldown_after_landing() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().jumping());
    // Ground is read before the move, so leaving the floor shows a frame late
    step(&mut movement, InputSample::default());
    step(&mut movement, InputSample::default());
    assert!(!movement.is_grounded());
    while !movement.is_grounded() {
        step(&mut movement, InputSample::default());
    }

    // Just landed: a fresh press is swallowed by the cooldown
    step(&mut movement, InputSample::default().jumping());
    assert!(movement.vertical_velocity() <= 0.0);
    assert!(movement.jump_cooldown() > 0.0);
    step(&mut movement, InputSample::default());

    // One second later the next press launches
    for _ in 0..60 {
        step(&mut movement, InputSample::default());
    }
    assert_eq!(movement.jump_cooldown(), 0.0);
    step(&mut movement, InputSample::default().jumping());
    assert!(movement.vertical_velocity() > 0.0);
    assert_eq!(movement.host().play_count(&jump_clip()), 2);
}

#[test]
fn test_fall_never_exceeds_terminal_velocity() {
    let mut movement =
        PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::airborne(10_000.0))
            .unwrap();

    for _ in 0..600 {
        step(&mut movement, InputSample::default());
        assert!(movement.vertical_velocity().abs() <= 53.0);
    }
    assert_eq!(movement.vertical_velocity(), -53.0);
}

#[test]
fn test_jump_ignored_while_airborne() {
    let mut movement =
        PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::airborne(50.0))
            .unwrap();

    step(&mut movement, InputSample::default().jumping());
    assert!(movement.vertical_velocity() < 0.0);
    assert_eq!(movement.host().play_count(&jump_clip()), 0);
}

// ============================================================================
// Crouch
// ============================================================================

#[test]
fn test_crouch_edge_switches_collider_and_fov() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().crouching());

    assert!(movement.is_crouched());
    assert_eq!(
        movement.host().shape,
        CapsuleShape::new(1.16, Vec3::new(0.0, 0.58, 0.0))
    );
    assert_eq!(movement.host().field_of_view, 55.0);
}

#[test]
fn test_holding_crouch_reapplies_without_flipping() {
    let mut movement = spawn_grounded();
    for _ in 0..30 {
        step(&mut movement, InputSample::default().crouching());
        assert!(movement.is_crouched());
        assert_eq!(movement.host().field_of_view, 55.0);
    }

    // Host drifted away from the crouched values; the next grounded frame restores them
    movement.host_mut().field_of_view = 70.0;
    movement.host_mut().shape = CapsuleShape::new(2.5, Vec3::new(0.0, 1.25, 0.0));
    step(&mut movement, InputSample::default().crouching());
    assert!(movement.is_crouched());
    assert_eq!(movement.host().field_of_view, 55.0);
    assert_eq!(
        movement.host().shape,
        CapsuleShape::new(1.16, Vec3::new(0.0, 0.58, 0.0))
    );

    // Release, press again: back to standing
    step(&mut movement, InputSample::default());
    step(&mut movement, InputSample::default().crouching());
    assert!(!movement.is_crouched());
    assert_eq!(movement.host().shape.height, 1.8);
    assert_eq!(movement.host().field_of_view, 60.0);
}

#[test]
fn test_crouch_press_in_air_does_nothing() {
    let mut movement =
        PlayerMovement::activate(ControllerConfig::default(), SimulatedHost::airborne(50.0))
            .unwrap();
    step(&mut movement, InputSample::default());
    step(&mut movement, InputSample::default().crouching());

    assert!(!movement.is_crouched());
    assert_eq!(movement.host().shape.height, 1.8);
}

#[test]
fn test_crouch_collider_not_applied_while_airborne() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().crouching());
    assert!(movement.is_crouched());

    // Knocked off the floor while crouched
    movement.host_mut().position.y = 5.0;
    movement.host_mut().grounded = false;
    step(&mut movement, InputSample::default().crouching());
    assert!(!movement.is_grounded());

    let marker = CapsuleShape::new(0.5, Vec3::new(0.0, 0.25, 0.0));
    movement.host_mut().shape = marker;
    movement.host_mut().field_of_view = 42.0;
    step(&mut movement, InputSample::moving(Vec2::Y).crouching());

    assert!(!movement.is_grounded());
    assert!(movement.is_crouched());
    assert_eq!(movement.host().shape, marker);
    assert_eq!(movement.host().field_of_view, 42.0);
}

#[test]
fn test_jump_clears_crouch() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().crouching());
    assert_eq!(movement.stance(), Stance::Crouching);

    step(&mut movement, InputSample::default().jumping());
    assert_eq!(movement.stance(), Stance::Standing);
    assert_eq!(movement.host().shape.height, 1.8);
    assert_eq!(movement.host().field_of_view, 60.0);
    assert_eq!(movement.host().play_count(&jump_clip()), 1);
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn test_animator_blends_into_crouch_pose() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().crouching());
    for _ in 0..60 {
        step(&mut movement, InputSample::moving(Vec2::Y));
    }

    let host = movement.host();
    assert!(approx_eq(host.float_param(STANCE_PARAM).unwrap(), 1.0));
    assert!(approx_eq(host.float_param(CROUCH_PARAM).unwrap(), 1.0));
    assert_eq!(host.bool_param(IN_AIR_PARAM), Some(false));
}

#[test]
fn test_animator_run_ratio() {
    let mut movement = spawn_grounded();
    for _ in 0..60 {
        step(&mut movement, InputSample::moving(Vec2::Y).running());
    }
    assert!(approx_eq(movement.host().float_param(BASE_PARAM).unwrap(), 1.0));
    assert!(approx_eq(movement.host().float_param(STANCE_PARAM).unwrap(), 0.0));
}

#[test]
fn test_animator_in_air_during_jump() {
    let mut movement = spawn_grounded();
    step(&mut movement, InputSample::default().jumping());
    // The capsule leaves the floor on the next move; ground is read before it
    step(&mut movement, InputSample::default());
    step(&mut movement, InputSample::default());
    assert_eq!(movement.host().bool_param(IN_AIR_PARAM), Some(true));
}

// ============================================================================
// Footsteps
// ============================================================================

#[test]
fn test_footstep_events_cycle_clips() {
    let mut movement = spawn_grounded();
    for _ in 0..30 {
        step(&mut movement, InputSample::moving(Vec2::Y));
    }

    let mut caller = FootstepCaller::new(&mut movement);
    for _ in 0..5 {
        assert!(caller.dispatch("OnFootstep"));
    }

    let names: Vec<&str> = movement.host().played.iter().map(|clip| clip.name()).collect();
    assert_eq!(
        names,
        vec!["footstep_01", "footstep_02", "footstep_03", "footstep_04", "footstep_01"]
    );
    assert_eq!(movement.footstep_index(), 1);
}

#[test]
fn test_footstep_silent_when_standing_still() {
    let mut movement = spawn_grounded();
    assert!(!FootstepCaller::new(&mut movement).on_footstep());
    assert!(movement.host().played.is_empty());
}

#[test]
fn test_land_event_plays_land_clip() {
    let mut movement = spawn_grounded();
    let mut caller = FootstepCaller::new(&mut movement);
    assert!(caller.dispatch("OnLand"));
    assert!(!caller.dispatch("OnAttack"));

    assert_eq!(movement.host().play_count(&AudioClip::new("land")), 1);
    assert_eq!(movement.host().played.len(), 1);
}

#[test]
fn test_custom_footstep_list_from_json() {
    let config = ControllerConfig::from_json_str(
        r#"{ "audio": { "footstep_clips": ["grass_a", "grass_b"] } }"#,
    )
    .unwrap();
    let mut movement = PlayerMovement::activate(config, SimulatedHost::new()).unwrap();
    step(&mut movement, InputSample::default());
    for _ in 0..30 {
        step(&mut movement, InputSample::moving(Vec2::Y));
    }

    for _ in 0..3 {
        movement.play_footstep();
    }
    let names: Vec<&str> = movement.host().played.iter().map(|clip| clip.name()).collect();
    assert_eq!(names, vec!["grass_a", "grass_b", "grass_a"]);
    // Jump and land clips keep their defaults
    assert_eq!(movement.config().audio.land_clip, AudioClip::new("land"));
}
