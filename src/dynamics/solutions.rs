use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::geometry::panel::PanelFrame;

// r is the vector pointing from the singularity to the point of interest.

fn perp(x: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(x.y, -x.x)
}

// Point vortex with the singularity smoothed over a core of radius delta_core.
// Katz & Plotkin, eqns. 10.9 and 10.10.
pub fn point_vortex_u(gamma: f64, r: Vector2<f64>, delta_core: f64) -> Vector2<f64> {
    perp(r) * (gamma / (2.0 * PI * (r.norm_squared() + delta_core.powi(2))))
}

// Unit-strength constant source panel, in the panel's own frame.
// Katz & Plotkin, eqns. 10.20 and 10.21.
pub fn source_panel_u_local(frame: &PanelFrame) -> Vector2<f64> {
    let PanelFrame { left, right, perp } = *frame;
    let u = ((left.powi(2) + perp.powi(2)) / (right.powi(2) + perp.powi(2))).ln() / (4.0 * PI);
    let w = (perp.atan2(right) - perp.atan2(left)) / (2.0 * PI);
    Vector2::new(u, w)
}

// Rotate a panel-frame velocity back to global axes.
pub fn to_global(v: Vector2<f64>, inclination: f64) -> Vector2<f64> {
    let (sin_b, cos_b) = inclination.sin_cos();
    Vector2::new(v.x * cos_b - v.y * sin_b, v.x * sin_b + v.y * cos_b)
}
