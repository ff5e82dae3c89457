//! Wake rollup: advect the free wake nodes with the velocity induced by the
//! body sources, the body and edge vortices and the wake itself.
//!
//! The newest node (slot 0) induces velocity but is not advected in the step
//! it was shed. All vortex sums share the same core radius.

use nalgebra::{DMatrix, Point2, Vector2};

use super::solutions::{point_vortex_u, source_panel_u_local, to_global};
use crate::error::{SimError, SimResult};
use crate::geometry::panel::{panel_vectors, transformation};
use crate::state::{Body, Edge, Wake, WakePhase};

// Velocity induced at each target by the body's source panels.
pub fn body_source_u(body: &Body, targets: &[Point2<f64>]) -> SimResult<Vec<Vector2<f64>>> {
    let frames = transformation(targets, &body.surface)?;
    let panels = panel_vectors(&body.surface)?;
    let influence = DMatrix::from_fn(targets.len(), panels.len(), |i, j| {
        to_global(source_panel_u_local(&frames[(i, j)]), panels[j].inclination())
    });
    let vx = influence.map(|v| v.x) * &body.sigma;
    let vz = influence.map(|v| v.y) * &body.sigma;
    Ok(vx
        .iter()
        .zip(vz.iter())
        .map(|(x, z)| Vector2::new(*x, *z))
        .collect())
}

// Accumulate the velocity induced at each target by a set of point vortices.
pub fn add_point_vortices_u(
    v: &mut [Vector2<f64>],
    targets: &[Point2<f64>],
    sources: &[Point2<f64>],
    gamma: &[f64],
    delta_core: f64,
) {
    for (v_i, target) in v.iter_mut().zip(targets) {
        *v_i += sources
            .iter()
            .zip(gamma)
            .map(|(source, g)| point_vortex_u(*g, target - source, delta_core))
            .sum::<Vector2<f64>>();
    }
}

/// Total induced velocity on the advected wake nodes, slots 1 to active - 1.
pub fn wake_induced_u(
    body: &Body,
    edge: &Edge,
    wake: &Wake,
    delta_core: f64,
) -> SimResult<Vec<Vector2<f64>>> {
    let sources = wake.nodes();
    let targets = &sources[1..];
    let mut v = body_source_u(body, targets)?;
    add_point_vortices_u(&mut v, targets, &body.surface, body.gamma.as_slice(), delta_core);
    add_point_vortices_u(&mut v, targets, &edge.nodes, &edge.gamma(), delta_core);
    add_point_vortices_u(&mut v, targets, sources, wake.gamma(), delta_core);
    Ok(v)
}

/// Advect the wake by one step, returning the induced velocity of each
/// advected node. Does nothing before step 2.
///
/// A non-finite velocity reports divergence without moving any wake node.
/// The node shed this step stays in place, so the state is only good for
/// inspection afterwards.
pub fn rollup_wake(
    body: &Body,
    edge: &Edge,
    wake: &mut Wake,
    delta_core: f64,
    step: usize,
    dt: f64,
) -> SimResult<Vec<Vector2<f64>>> {
    if step < 2 {
        return Ok(Vec::new());
    }
    assert!(
        wake.phase == WakePhase::Rolling && wake.last_step == Some(step),
        "rollup at step {} before the wake was shed (last shed step {:?})",
        step,
        wake.last_step
    );

    let v = wake_induced_u(body, edge, wake, delta_core)?;
    if let Some(i) = v.iter().position(|v_i| !(v_i.x.is_finite() && v_i.y.is_finite())) {
        return Err(SimError::Divergence { step, node: i + 1 });
    }

    let active = wake.active;
    for (node, v_i) in wake.nodes[1..active].iter_mut().zip(&v) {
        *node += v_i * dt;
    }
    Ok(v)
}
