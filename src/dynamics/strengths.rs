use nalgebra::DVector;

use crate::error::SimResult;
use crate::state::{Body, Wake};

/// Body and edge singularity strengths for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Strengths {
    // One source strength per body panel.
    pub sigma: DVector<f64>,
    // One vortex strength per body surface endpoint.
    pub gamma: DVector<f64>,
    pub edge_mu: f64,
}

/// Supplies the strengths that satisfy the body boundary condition.
///
/// Called once per step, after the body geometry and collocation velocities
/// are rebuilt and before the edge and wake are shed.
pub trait StrengthSolver {
    fn solve(&mut self, body: &Body, wake: &Wake, t: f64) -> SimResult<Strengths>;
}

/// Uniform strengths held fixed for the whole run.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PrescribedStrengths {
    #[serde(default)]
    pub sigma: f64,
    #[serde(default)]
    pub gamma: f64,
    #[serde(default)]
    pub edge_mu: f64,
}

impl StrengthSolver for PrescribedStrengths {
    fn solve(&mut self, body: &Body, _wake: &Wake, _t: f64) -> SimResult<Strengths> {
        let n = body.n_panels();
        Ok(Strengths {
            sigma: DVector::from_element(n, self.sigma),
            gamma: DVector::from_element(n + 1, self.gamma),
            edge_mu: self.edge_mu,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::profile::BodyProfile;

    #[test]
    fn test_prescribed_shapes() {
        let body = Body::new(vec![], 1.0, BodyProfile::naca_symmetric(1.0, 0.1, 12).unwrap());
        let wake = Wake::new(4, 1.0);
        let mut solver = PrescribedStrengths {
            sigma: 0.5,
            gamma: -0.25,
            edge_mu: 0.1,
        };
        let s = solver.solve(&body, &wake, 0.0).unwrap();
        assert_eq!(s.sigma.len(), 12);
        assert_eq!(s.gamma.len(), 13);
        assert!(s.sigma.iter().all(|v| *v == 0.5));
        assert!(s.gamma.iter().all(|v| *v == -0.25));
        assert_eq!(s.edge_mu, 0.1);
    }
}
