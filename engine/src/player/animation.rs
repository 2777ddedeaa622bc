//! Animator Parameter Driving
//!
//! Names of the animator parameters and the per-tick locomotion blend.

use crate::host::AnimatorParams;
use crate::math::Smoothing;

/// Bool: character is airborne
pub const IN_AIR_PARAM: &str = "InAir";
/// Float: 0 = standing poses, 1 = crouched poses
pub const STANCE_PARAM: &str = "Stance";
/// Float: standing speed ratio (current / run speed)
pub const BASE_PARAM: &str = "Base";
/// Float: crouched speed ratio (current / crouched speed)
pub const CROUCH_PARAM: &str = "Crouch";

/// Inputs for one animator update.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocomotionPose {
    pub grounded: bool,
    pub crouched: bool,
    pub strafe: bool,
    pub current_speed: f32,
    pub run_speed: f32,
    pub crouched_speed: f32,
}

/// Write the animator parameters for this tick.
///
/// Airborne only raises `InAir`; the grounded blend is left where it was so
/// landing resumes from the same pose. Strafing on the ground writes nothing.
pub(crate) fn drive_animator<A: AnimatorParams + ?Sized>(
    animator: &mut A,
    pose: LocomotionPose,
    smoothing: Smoothing,
    factor: f32,
    dt: f32,
) {
    if !pose.grounded {
        animator.set_bool(IN_AIR_PARAM, true);
        return;
    }

    if !pose.strafe {
        let (stance_target, ratio_param, ratio) = if pose.crouched {
            (1.0, CROUCH_PARAM, pose.current_speed / pose.crouched_speed)
        } else {
            (0.0, BASE_PARAM, pose.current_speed / pose.run_speed)
        };

        let stance = smoothing.step(animator.float(STANCE_PARAM), stance_target, factor, dt);
        animator.set_float(STANCE_PARAM, stance);
        animator.set_float(ratio_param, ratio);
        animator.set_bool(IN_AIR_PARAM, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimulatedHost;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn pose(grounded: bool, crouched: bool) -> LocomotionPose {
        LocomotionPose {
            grounded,
            crouched,
            strafe: false,
            current_speed: 2.665,
            run_speed: 5.33,
            crouched_speed: 1.33,
        }
    }

    #[test]
    fn test_airborne_only_sets_in_air() {
        let mut host = SimulatedHost::new();
        drive_animator(&mut host, pose(false, false), Smoothing::PerTick, 0.33, 0.016);

        assert_eq!(host.bool_param(IN_AIR_PARAM), Some(true));
        assert_eq!(host.float_param(STANCE_PARAM), None);
        assert_eq!(host.float_param(BASE_PARAM), None);
    }

    #[test]
    fn test_standing_blend() {
        let mut host = SimulatedHost::new();
        host.set_float(STANCE_PARAM, 1.0);
        drive_animator(&mut host, pose(true, false), Smoothing::PerTick, 0.33, 0.016);

        assert!(approx_eq(host.float(STANCE_PARAM), 0.67));
        assert!(approx_eq(host.float(BASE_PARAM), 0.5));
        assert_eq!(host.bool_param(IN_AIR_PARAM), Some(false));
        assert_eq!(host.float_param(CROUCH_PARAM), None);
    }

    #[test]
    fn test_crouched_blend() {
        let mut host = SimulatedHost::new();
        let mut crouched = pose(true, true);
        crouched.current_speed = 1.33;

        for _ in 0..60 {
            drive_animator(&mut host, crouched, Smoothing::PerTick, 0.33, 0.016);
        }

        assert!(approx_eq(host.float(STANCE_PARAM), 1.0));
        assert!(approx_eq(host.float(CROUCH_PARAM), 1.0));
        assert_eq!(host.bool_param(IN_AIR_PARAM), Some(false));
    }

    #[test]
    fn test_strafe_skips_locomotion_blend() {
        let mut host = SimulatedHost::new();
        let mut strafing = pose(true, false);
        strafing.strafe = true;

        drive_animator(&mut host, strafing, Smoothing::PerTick, 0.33, 0.016);
        assert_eq!(host.float_param(STANCE_PARAM), None);
        assert_eq!(host.bool_param(IN_AIR_PARAM), None);
    }

    #[test]
    fn test_strafe_landing_keeps_in_air() {
        let mut host = SimulatedHost::new();
        drive_animator(&mut host, pose(false, false), Smoothing::PerTick, 0.33, 0.016);

        let mut strafing = pose(true, false);
        strafing.strafe = true;
        drive_animator(&mut host, strafing, Smoothing::PerTick, 0.33, 0.016);
        assert_eq!(host.bool_param(IN_AIR_PARAM), Some(true));
    }
}
