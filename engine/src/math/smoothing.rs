//! Smoothing Primitives
//!
//! Two families of smoothing are used by the controller:
//!
//! - **Blend toward a target by a factor** ([`Smoothing`]): speed, stance
//!   and rig weight all move a fixed fraction of the remaining distance.
//! - **Critically damped spring** ([`smooth_damp`], [`smooth_damp_angle`]):
//!   the character yaw follows its target with a velocity that is carried
//!   between frames.
//!
//! # Frame-rate dependence
//!
//! `Smoothing::PerTick` applies the factor once per call, exactly like the
//! classic `lerp(current, target, k)` idiom. At 30 fps the value converges
//! half as fast as at 60 fps. `Smoothing::FrameRateIndependent` rescales the
//! factor by elapsed time against a 60 Hz reference, so a 60 fps run is
//! identical between the two modes while other frame rates converge at the
//! same wall-clock rate.

use serde::{Deserialize, Serialize};

/// Reference tick rate for frame-rate independent smoothing.
pub const REFERENCE_TICK_RATE: f32 = 60.0;

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// How blend factors are applied each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    /// Constant factor per call (frame-rate dependent).
    #[default]
    PerTick,
    /// Exponential decay normalized to [`REFERENCE_TICK_RATE`].
    FrameRateIndependent,
}

impl Smoothing {
    /// Move `current` toward `target` by `factor`.
    ///
    /// # Arguments
    /// * `current` - Value this frame
    /// * `target` - Value being approached
    /// * `factor` - Fraction of the remaining distance covered per reference tick
    /// * `dt` - Delta time in seconds (ignored by `PerTick`)
    pub fn step(self, current: f32, target: f32, factor: f32, dt: f32) -> f32 {
        match self {
            Smoothing::PerTick => lerp(current, target, factor),
            Smoothing::FrameRateIndependent => {
                let factor = factor.clamp(0.0, 1.0);
                if dt <= 0.0 {
                    return current;
                }
                if factor >= 1.0 {
                    return target;
                }
                let retained = (1.0 - factor).powf(dt * REFERENCE_TICK_RATE);
                lerp(current, target, 1.0 - retained)
            }
        }
    }
}

/// Critically damped spring toward `target`.
///
/// `velocity` is carried between calls. The result never overshoots the
/// target. Returns `current` unchanged when `dt` is not positive.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Polynomial approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = clamped_target + (change + temp) * decay;

    // Prevent overshooting
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// [`smooth_damp`] for angles in degrees, always turning the short way round.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + super::angles::delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, f32::INFINITY, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_clamps_factor() {
        assert!(approx_eq(lerp(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp(0.0, 10.0, 3.0), 10.0));
        assert!(approx_eq(lerp(0.0, 10.0, -1.0), 0.0));
    }

    #[test]
    fn test_per_tick_ignores_delta_time() {
        let a = Smoothing::PerTick.step(0.0, 1.0, 0.33, 1.0 / 30.0);
        let b = Smoothing::PerTick.step(0.0, 1.0, 0.33, 1.0 / 120.0);
        assert!(approx_eq(a, b));
        assert!(approx_eq(a, 0.33));
    }

    #[test]
    fn test_frame_rate_independent_matches_per_tick_at_reference_rate() {
        let dt = 1.0 / REFERENCE_TICK_RATE;
        let per_tick = Smoothing::PerTick.step(2.0, 5.0, 0.33, dt);
        let independent = Smoothing::FrameRateIndependent.step(2.0, 5.0, 0.33, dt);
        assert!(approx_eq(per_tick, independent));
    }

    #[test]
    fn test_frame_rate_independent_same_result_over_same_wall_time() {
        let mut coarse = 0.0;
        for _ in 0..30 {
            coarse = Smoothing::FrameRateIndependent.step(coarse, 1.0, 0.2, 1.0 / 30.0);
        }
        let mut fine = 0.0;
        for _ in 0..120 {
            fine = Smoothing::FrameRateIndependent.step(fine, 1.0, 0.2, 1.0 / 120.0);
        }
        assert!((coarse - fine).abs() < 0.01);
    }

    #[test]
    fn test_frame_rate_independent_zero_dt_holds() {
        assert!(approx_eq(Smoothing::FrameRateIndependent.step(3.0, 9.0, 0.5, 0.0), 3.0));
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        for _ in 0..200 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.2, f32::INFINITY, 0.016);
            assert!(value <= 10.0 + EPSILON);
        }
        assert!(approx_eq(value, 10.0));
    }

    #[test]
    fn test_smooth_damp_angle_wraps_short_way() {
        let mut velocity = 0.0;
        let next = smooth_damp_angle(350.0, 10.0, &mut velocity, 0.2, 0.016);
        // Turning through 360 rather than back through 180
        assert!(next > 350.0);
        assert!(velocity > 0.0);
    }

    #[test]
    fn test_smooth_damp_zero_dt_holds() {
        let mut velocity = 4.0;
        assert!(approx_eq(smooth_damp(1.0, 5.0, &mut velocity, 0.2, f32::INFINITY, 0.0), 1.0));
        assert!(approx_eq(velocity, 4.0));
    }
}
