use log::{debug, warn};
use nalgebra::Vector2;

use crate::state::{Edge, Wake, WakePhase};

/// Shed the edge's far node into the wake.
///
/// Step 0 does nothing. Step 1 places the first node at the edge's far node
/// and seeds the rest of the buffer on a straight line behind it, spaced by
/// one step of pure convection. From step 2 on, existing nodes and their
/// circulation shift down one slot and the new node takes slot 0.
///
/// Panics if steps are not shed in order starting from 0.
pub fn shed_wake(edge: &Edge, wake: &mut Wake, step: usize, dt: f64) {
    match wake.last_step {
        Some(last) => assert_eq!(
            step,
            last + 1,
            "wake shed at step {} after step {}",
            step,
            last
        ),
        None => assert_eq!(step, 0, "wake must be shed from step 0, got step {}", step),
    }
    wake.phase = wake.phase.transition(step);
    wake.last_step = Some(step);

    match wake.phase {
        WakePhase::Uninitialized => {}
        WakePhase::Bootstrapped => bootstrap(edge, wake, dt),
        WakePhase::Rolling => shift_and_insert(edge, wake),
    }
}

fn bootstrap(edge: &Edge, wake: &mut Wake, dt: f64) {
    let head = edge.far_node();
    let spacing = Vector2::new(-wake.v0 * dt, 0.0);
    for (k, node) in wake.nodes.iter_mut().enumerate() {
        *node = head + spacing * k as f64;
    }
    wake.active = 1;
}

fn shift_and_insert(edge: &Edge, wake: &mut Wake) {
    let capacity = wake.capacity();
    if wake.active == capacity {
        warn!("wake buffer full ({} nodes), discarding the oldest node", capacity);
    }
    wake.active = (wake.active + 1).min(capacity);
    let active = wake.active;
    let segments = active - 1;

    wake.nodes.copy_within(0..active - 1, 1);
    wake.mu.copy_within(0..segments - 1, 1);
    wake.nodes[0] = edge.far_node();
    wake.mu[0] = edge.mu;

    update_gamma(wake);
    debug!("wake has {} active nodes", active);
}

// Node strengths from the differences of segment circulation along the chain.
fn update_gamma(wake: &mut Wake) {
    let active = wake.active;
    let segments = active - 1;
    wake.gamma[0] = -wake.mu[0];
    for k in 1..active {
        let next = if k < segments { wake.mu[k] } else { 0.0 };
        wake.gamma[k] = wake.mu[k - 1] - next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{point, Point2};

    fn edge_at(x: f64, z: f64, mu: f64) -> Edge {
        Edge {
            ce: 0.4,
            nodes: [point![x - 0.1, z], point![x, z]],
            mu,
            last_step: None,
        }
    }

    #[test]
    fn test_step_zero_is_noop() {
        let mut wake = Wake::new(5, 1.0);
        shed_wake(&edge_at(1.0, 0.0, 0.5), &mut wake, 0, 0.01);
        assert_eq!(wake.active(), 0);
        assert_eq!(wake.phase(), WakePhase::Uninitialized);
        assert!(wake.buffer().iter().all(|p| *p == Point2::origin()));
    }

    #[test]
    fn test_bootstrap_layout() {
        let mut wake = Wake::new(5, 2.0);
        shed_wake(&edge_at(1.0, 0.3, 0.5), &mut wake, 0, 0.01);
        shed_wake(&edge_at(1.0, 0.3, 0.5), &mut wake, 1, 0.01);
        assert_eq!(wake.active(), 1);
        assert_eq!(wake.phase(), WakePhase::Bootstrapped);
        assert_eq!(wake.nodes()[0], point![1.0, 0.3]);
        for (k, node) in wake.buffer().iter().enumerate() {
            assert_relative_eq!(node.x, 1.0 - 0.02 * k as f64, epsilon = 1e-14);
            assert_eq!(node.y, 0.3);
        }
        // No circulation is shed on bootstrap.
        assert!(wake.mu().is_empty());
    }

    #[test]
    fn test_shift_keeps_order() {
        let mut wake = Wake::new(6, 1.0);
        shed_wake(&edge_at(0.0, 0.0, 0.0), &mut wake, 0, 0.01);
        shed_wake(&edge_at(1.0, 0.0, 0.0), &mut wake, 1, 0.01);
        for step in 2..5 {
            shed_wake(&edge_at(step as f64, 0.0, step as f64), &mut wake, step, 0.01);
            assert_eq!(wake.active(), step);
            assert_eq!(wake.nodes()[0], point![step as f64, 0.0]);
        }
        let xs: Vec<f64> = wake.nodes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![4.0, 3.0, 2.0, 1.0]);
        assert_eq!(wake.mu(), &[4.0, 3.0, 2.0][..]);
    }

    #[test]
    fn test_gamma_telescopes_to_mu() {
        let mut wake = Wake::new(10, 1.0);
        let mus = [0.3, -0.1, 0.25, 0.7, 0.05, -0.4];
        shed_wake(&edge_at(0.0, 0.0, 0.0), &mut wake, 0, 0.01);
        shed_wake(&edge_at(0.0, 0.0, 0.0), &mut wake, 1, 0.01);
        for (i, mu) in mus.iter().enumerate() {
            shed_wake(&edge_at(0.0, 0.0, *mu), &mut wake, i + 2, 0.01);
        }
        let mu = wake.mu();
        let gamma = wake.gamma();
        assert_eq!(gamma.len(), mu.len() + 1);
        for k in 1..=mu.len() {
            let prefix: f64 = gamma[..k].iter().sum();
            assert_relative_eq!(prefix, -mu[k - 1], epsilon = 1e-14);
        }
        // The chain is closed: total circulation vanishes.
        assert_relative_eq!(gamma.iter().sum::<f64>(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_full_buffer_discards_oldest() {
        let mut wake = Wake::new(3, 1.0);
        shed_wake(&edge_at(0.0, 0.0, 0.0), &mut wake, 0, 0.01);
        for step in 1..6 {
            shed_wake(&edge_at(step as f64, 0.0, step as f64), &mut wake, step, 0.01);
        }
        assert_eq!(wake.active(), 3);
        let xs: Vec<f64> = wake.nodes().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![5.0, 4.0, 3.0]);
        assert_eq!(wake.mu(), &[5.0, 4.0][..]);
        assert_eq!(wake.gamma(), &[-5.0, 1.0, 4.0][..]);
    }

    #[test]
    #[should_panic(expected = "wake shed at step 3 after step 1")]
    fn test_skipped_step_panics() {
        let mut wake = Wake::new(5, 1.0);
        let edge = edge_at(0.0, 0.0, 0.0);
        shed_wake(&edge, &mut wake, 0, 0.01);
        shed_wake(&edge, &mut wake, 1, 0.01);
        shed_wake(&edge, &mut wake, 3, 0.01);
    }

    #[test]
    #[should_panic(expected = "wake must be shed from step 0")]
    fn test_missing_initialisation_panics() {
        let mut wake = Wake::new(5, 1.0);
        shed_wake(&edge_at(0.0, 0.0, 0.0), &mut wake, 2, 0.01);
    }
}
