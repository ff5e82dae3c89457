use nalgebra::Point2;

use crate::config::setup::parameters::motion::MotionComponent;
use crate::error::SimResult;
use crate::geometry::panel::{point_vectors, PointVectors};

/// Position of the neutral-axis point with longitudinal coordinate
/// `x_ref + dstep`, evaluated at time `t + tstep`.
///
/// `dstep` and `tstep` are finite-difference perturbations; with both zero
/// this is the actual point.
pub fn neutral_axis(
    motions: &[MotionComponent],
    x_ref: f64,
    dstep: f64,
    tstep: f64,
    t: f64,
) -> Point2<f64> {
    motions
        .iter()
        .fold(Point2::new(x_ref + dstep, 0.0), |p, m| m.displace(p, t + tstep))
}

pub fn neutral_axis_multi(
    motions: &[MotionComponent],
    xs: &[f64],
    dstep: f64,
    tstep: f64,
    t: f64,
) -> Vec<Point2<f64>> {
    xs.iter()
        .map(|x| neutral_axis(motions, *x, dstep, tstep, t))
        .collect()
}

// Local tangent and normal of the neutral axis by central difference along it.
pub fn neutral_axis_vectors(
    motions: &[MotionComponent],
    xs: &[f64],
    dstep: f64,
    tstep: f64,
    t: f64,
) -> SimResult<Vec<PointVectors>> {
    let plus = neutral_axis_multi(motions, xs, dstep, tstep, t);
    let minus = neutral_axis_multi(motions, xs, -dstep, tstep, t);
    point_vectors(&plus, &minus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn pitch() -> Vec<MotionComponent> {
        vec![MotionComponent::Pitch {
            theta_max: 0.2,
            f: 1.0,
            phi: 0.0,
        }]
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let motions = pitch();
        for i in 0..40 {
            let t = 0.037 * i as f64;
            for x in [0.0, 0.25, 1.0, -0.5] {
                let p = neutral_axis(&motions, x, 0.0, 0.0, t);
                assert_relative_eq!(p.coords.norm(), f64::abs(x), epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_no_motion_is_identity() {
        let p = neutral_axis(&[], 0.7, 0.1, 0.3, 2.0);
        assert_relative_eq!(p, Point2::new(0.8, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_time_offset_equals_shifted_time() {
        let motions = pitch();
        let a = neutral_axis(&motions, 1.0, 0.0, 0.05, 0.2);
        let b = neutral_axis(&motions, 1.0, 0.0, 0.0, 0.25);
        assert_relative_eq!(a, b, epsilon = 1e-14);
    }

    #[test]
    fn test_vectors_follow_pitch_angle() {
        let motions = pitch();
        let t = 0.25;
        let theta = motions[0].pitch_angle(t);
        let pvs = neutral_axis_vectors(&motions, &[0.0, 0.5, 1.0], 1e-5, 0.0, t).unwrap();
        for pv in pvs {
            assert_relative_eq!(pv.tangent, Vector2::new(theta.cos(), theta.sin()), epsilon = 1e-10);
            assert_relative_eq!(pv.normal, Vector2::new(-theta.sin(), theta.cos()), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_dstep_is_degenerate() {
        assert!(neutral_axis_vectors(&pitch(), &[0.5], 0.0, 0.0, 0.1).is_err());
    }
}
