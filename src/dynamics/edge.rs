use log::debug;

use crate::error::SimResult;
use crate::geometry::panel::panel_vectors;
use crate::state::{Body, Edge};

/// Place the edge panel at the trailing edge for the current step.
///
/// The panel runs along the neutral axis' first tangent, with length
/// `ce * v0 * dt`. Nothing happens on the initialisation step.
///
/// Panics if steps are not shed in order starting from 0.
pub fn shed_edge(body: &Body, edge: &mut Edge, step: usize, dt: f64) -> SimResult<()> {
    match edge.last_step {
        Some(last) => assert_eq!(
            step,
            last + 1,
            "edge shed at step {} after step {}",
            step,
            last
        ),
        None => assert_eq!(step, 0, "edge must be shed from step 0, got step {}", step),
    }
    if step == 0 {
        edge.last_step = Some(step);
        return Ok(());
    }
    let tangent = panel_vectors(&body.neutral_axis[..2])?[0].tangent;
    let te = body.trailing_edge();
    edge.nodes = [te, te + tangent * (edge.ce * body.v0 * dt)];
    edge.last_step = Some(step);
    debug!("edge at step {}: {} -> {}", step, edge.nodes[0], edge.nodes[1]);
    Ok(())
}
