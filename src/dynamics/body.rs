use nalgebra::{Point2, Vector2};

use super::kinematics::{neutral_axis_multi, neutral_axis_vectors};
use crate::error::SimResult;
use crate::geometry::panel::panel_vectors;
use crate::state::Body;

// Points offset from the neutral axis by `zs` along its local normal, at
// time t + tstep, including the body's translation.
fn surface_points(
    body: &Body,
    xs: &[f64],
    zs: &[f64],
    dstep: f64,
    tstep: f64,
    t: f64,
) -> SimResult<Vec<Point2<f64>>> {
    let neutral = neutral_axis_multi(&body.motions, xs, 0.0, tstep, t);
    let vectors = neutral_axis_vectors(&body.motions, xs, dstep, tstep, t)?;
    let convection = Vector2::new(body.v0 * (t + tstep), 0.0);
    Ok(neutral
        .iter()
        .zip(&vectors)
        .zip(zs)
        .map(|((p, pv), z)| p + pv.normal * *z + convection)
        .collect())
}

/// Rebuild the surface endpoints and collocation points for time `t`.
///
/// Collocation points sit at the panel midpoints, pulled inwards along the
/// panel's outward normal by `collocation_offset` times the local
/// half-thickness.
pub fn rebuild_geometry(
    body: &mut Body,
    collocation_offset: f64,
    dstep: f64,
    t: f64,
) -> SimResult<()> {
    let surface = surface_points(body, &body.profile.x, &body.profile.z, dstep, 0.0, t)?;
    let panels = panel_vectors(&surface)?;
    let collocation = surface
        .windows(2)
        .zip(&panels)
        .zip(&body.profile.z_col)
        .map(|((w, pv), z_col)| {
            nalgebra::center(&w[0], &w[1]) - pv.normal * (collocation_offset * z_col.abs())
        })
        .collect();

    body.neutral_axis = neutral_axis_multi(&body.motions, &body.profile.x, 0.0, 0.0, t);
    body.surface = surface;
    body.collocation = collocation;
    Ok(())
}

// Central difference in time of the reference panel midpoints.
pub fn compute_collocation_velocity(
    body: &mut Body,
    dstep: f64,
    tstep: f64,
    t: f64,
) -> SimResult<()> {
    let plus = surface_points(body, &body.profile.x_col, &body.profile.z_col, dstep, tstep, t)?;
    let minus = surface_points(body, &body.profile.x_col, &body.profile.z_col, dstep, -tstep, t)?;
    body.collocation_velocity = plus
        .iter()
        .zip(&minus)
        .map(|(p, m)| (p - m) / (2.0 * tstep))
        .collect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::setup::parameters::motion::MotionComponent;
    use crate::geometry::profile::BodyProfile;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn body(theta_max: f64, v0: f64) -> Body {
        Body::new(
            vec![MotionComponent::Pitch {
                theta_max,
                f: 1.0,
                phi: 0.0,
            }],
            v0,
            BodyProfile::naca_symmetric(1.0, 0.12, 10).unwrap(),
        )
    }

    #[test]
    fn test_rebuild_shapes_and_offsets() {
        let mut body = body(0.2, 1.0);
        let t = 0.13;
        rebuild_geometry(&mut body, 0.01, 1e-5, t).unwrap();
        assert_eq!(body.surface.len(), 11);
        assert_eq!(body.collocation.len(), 10);

        // Each endpoint is its half-thickness away from the translated neutral axis.
        let shift = Vector2::new(body.v0 * t, 0.0);
        for k in 0..11 {
            let d = body.surface[k] - (body.neutral_axis[k] + shift);
            assert_relative_eq!(d.norm(), body.profile.z[k].abs(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rest_geometry_matches_profile() {
        let mut body = body(0.2, 1.0);
        // sin(0) = 0, so no pitch and no translation yet.
        rebuild_geometry(&mut body, 0.0, 1e-5, 0.0).unwrap();
        for k in 0..11 {
            assert_relative_eq!(body.surface[k].x, body.profile.x[k], epsilon = 1e-9);
            assert_relative_eq!(body.surface[k].y, body.profile.z[k], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_collocation_points_move_inwards() {
        let mut flush = body(0.0, 1.0);
        let mut shifted = body(0.0, 1.0);
        rebuild_geometry(&mut flush, 0.0, 1e-5, 0.0).unwrap();
        rebuild_geometry(&mut shifted, 0.2, 1e-5, 0.0).unwrap();
        for k in 0..10 {
            assert!(shifted.collocation[k].y.abs() < flush.collocation[k].y.abs());
            assert_relative_eq!(
                (flush.collocation[k] - shifted.collocation[k]).norm(),
                0.2 * flush.profile.z_col[k].abs(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_pure_translation_velocity() {
        let mut body = body(0.0, 1.0);
        for t in [0.0, 0.01, 0.37] {
            compute_collocation_velocity(&mut body, 1e-5, 1e-5, t).unwrap();
            assert_eq!(body.collocation_velocity.len(), 10);
            for v in &body.collocation_velocity {
                assert_relative_eq!(*v, Vector2::new(1.0, 0.0), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_pitching_velocity() {
        let theta_max = 0.2;
        let mut body = body(theta_max, -1.0);
        let t = 0.1;
        compute_collocation_velocity(&mut body, 1e-5, 1e-5, t).unwrap();

        let arg = 2.0 * PI * t;
        let theta = theta_max * arg.sin();
        let theta_dot = theta_max * 2.0 * PI * arg.cos();
        for k in 0..10 {
            let (x, z) = (body.profile.x_col[k], body.profile.z_col[k]);
            let expected = Vector2::new(
                -1.0 + theta_dot * (-x * theta.sin() - z * theta.cos()),
                theta_dot * (x * theta.cos() - z * theta.sin()),
            );
            assert_relative_eq!(body.collocation_velocity[k], expected, epsilon = 1e-6);
        }
    }
}
