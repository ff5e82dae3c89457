//! Panel geometry shared by the body builder and the wake rollup.
//!
//! Panels are the straight segments between consecutive points of a
//! polyline. Tangents point from point `k` to point `k + 1` and normals are
//! the tangent rotated a quarter turn anticlockwise, `(-t_z, t_x)`, which is
//! outward for a surface traversed clockwise.

use nalgebra::{DMatrix, Point2, Vector2};

use crate::error::{SimError, SimResult};

// Shortest panel length accepted before a panel is considered collapsed.
const MIN_PANEL_LENGTH: f64 = 1e-14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelVectors {
    pub length: f64,
    pub tangent: Vector2<f64>,
    pub normal: Vector2<f64>,
}

impl PanelVectors {
    fn from_span(index: usize, span: Vector2<f64>) -> SimResult<Self> {
        let length = span.norm();
        if !(length.is_finite() && length > MIN_PANEL_LENGTH) {
            return Err(SimError::DegenerateGeometry { index, length });
        }
        let tangent = span / length;
        Ok(PanelVectors {
            length,
            tangent,
            normal: Vector2::new(-tangent.y, tangent.x),
        })
    }

    // Inclination of the panel, measured from the global x axis.
    pub fn inclination(&self) -> f64 {
        (-self.normal.x).atan2(self.normal.y)
    }
}

pub fn panel_vectors(points: &[Point2<f64>]) -> SimResult<Vec<PanelVectors>> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, w)| PanelVectors::from_span(i, w[1] - w[0]))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVectors {
    pub tangent: Vector2<f64>,
    pub normal: Vector2<f64>,
}

/// Unit tangent and normal at each sample from a pair of perturbed positions.
///
/// `plus[k]` and `minus[k]` are the same curve point displaced forwards and
/// backwards along the curve parameter; their difference is a central
/// difference of the curve's direction.
pub fn point_vectors(
    plus: &[Point2<f64>],
    minus: &[Point2<f64>],
) -> SimResult<Vec<PointVectors>> {
    plus.iter()
        .zip(minus)
        .enumerate()
        .map(|(i, (p, m))| {
            let PanelVectors {
                tangent, normal, ..
            } = PanelVectors::from_span(i, p - m)?;
            Ok(PointVectors { tangent, normal })
        })
        .collect()
}

/// Position of a target point in a panel's own frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    // Along-panel distance from the panel's first point.
    pub left: f64,
    // Along-panel distance from the panel's second point.
    pub right: f64,
    // Distance along the panel normal.
    pub perp: f64,
}

/// Express every target in every panel's local frame.
///
/// Rows are targets, columns are panels.
pub fn transformation(
    targets: &[Point2<f64>],
    panel_points: &[Point2<f64>],
) -> SimResult<DMatrix<PanelFrame>> {
    let panels = panel_vectors(panel_points)?;
    Ok(DMatrix::from_fn(targets.len(), panels.len(), |i, j| {
        let p = targets[i];
        let pv = &panels[j];
        let from_left = p - panel_points[j];
        let from_right = p - panel_points[j + 1];
        PanelFrame {
            left: from_left.dot(&pv.tangent),
            right: from_right.dot(&pv.tangent),
            perp: from_left.dot(&pv.normal),
        }
    }))
}
