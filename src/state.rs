use log::debug;
use nalgebra::{DVector, Point2, Vector2};

use crate::config::setup::parameters::motion::MotionComponent;
use crate::error::{SimError, SimResult};
use crate::geometry::profile::BodyProfile;

/// The oscillating body.
///
/// Motion parameters and the reference profile are fixed for a run. The
/// geometry fields are rebuilt from scratch every step, and the strengths
/// are overwritten by the strength solver before the wake is updated.
#[derive(Clone, Debug)]
pub struct Body {
    pub motions: Vec<MotionComponent>,
    pub v0: f64,
    pub profile: BodyProfile,
    // Neutral axis at the profile samples, without the convection term.
    pub neutral_axis: Vec<Point2<f64>>,
    // N + 1 surface panel endpoints.
    pub surface: Vec<Point2<f64>>,
    // N collocation points and their velocities.
    pub collocation: Vec<Point2<f64>>,
    pub collocation_velocity: Vec<Vector2<f64>>,
    // Per-panel source strengths.
    pub sigma: DVector<f64>,
    // Point vortex strengths at the surface endpoints.
    pub gamma: DVector<f64>,
}

impl Body {
    pub fn new(motions: Vec<MotionComponent>, v0: f64, profile: BodyProfile) -> Self {
        let n = profile.n_panels();
        let surface: Vec<Point2<f64>> = profile
            .x
            .iter()
            .zip(&profile.z)
            .map(|(x, z)| Point2::new(*x, *z))
            .collect();
        let collocation = surface
            .windows(2)
            .map(|w| nalgebra::center(&w[0], &w[1]))
            .collect();
        Body {
            motions,
            v0,
            neutral_axis: profile.x.iter().map(|x| Point2::new(*x, 0.0)).collect(),
            surface,
            collocation,
            collocation_velocity: vec![Vector2::zeros(); n],
            sigma: DVector::zeros(n),
            gamma: DVector::zeros(n + 1),
            profile,
        }
    }

    pub fn n_panels(&self) -> usize {
        self.profile.n_panels()
    }

    pub fn trailing_edge(&self) -> Point2<f64> {
        self.surface[0]
    }

    pub fn set_strengths(&mut self, sigma: DVector<f64>, gamma: DVector<f64>) -> SimResult<()> {
        let n = self.n_panels();
        if sigma.len() != n {
            return Err(SimError::StrengthShape {
                name: "sigma",
                expected: n,
                got: sigma.len(),
            });
        }
        if gamma.len() != n + 1 {
            return Err(SimError::StrengthShape {
                name: "gamma",
                expected: n + 1,
                got: gamma.len(),
            });
        }
        self.sigma = sigma;
        self.gamma = gamma;
        Ok(())
    }
}

/// The single panel bridging the trailing edge and the newest wake node.
#[derive(Clone, Debug)]
pub struct Edge {
    // Panel length coefficient.
    pub ce: f64,
    pub nodes: [Point2<f64>; 2],
    pub mu: f64,
    pub(crate) last_step: Option<usize>,
}

impl Edge {
    pub fn new(ce: f64) -> Self {
        Edge {
            ce,
            nodes: [Point2::origin(); 2],
            mu: 0.0,
            last_step: None,
        }
    }

    // A uniform doublet panel is equivalent to opposite point vortices at its ends.
    pub fn gamma(&self) -> [f64; 2] {
        [-self.mu, self.mu]
    }

    pub fn far_node(&self) -> Point2<f64> {
        self.nodes[1]
    }

    pub fn last_step(&self) -> Option<usize> {
        self.last_step
    }
}

/// Which of the three wake regimes a step falls in.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakePhase {
    // Geometry initialisation step; nothing is shed.
    Uninitialized,
    // First node shed, remaining buffer seeded by pure convection.
    Bootstrapped,
    // Nodes shift down the buffer each step and roll up.
    Rolling,
}

impl WakePhase {
    pub fn from_step(step: usize) -> Self {
        match step {
            0 => WakePhase::Uninitialized,
            1 => WakePhase::Bootstrapped,
            _ => WakePhase::Rolling,
        }
    }

    /// Move to the phase of `step`, panicking on a transition that skips or
    /// repeats the bootstrap.
    pub fn transition(self, step: usize) -> Self {
        use WakePhase::*;
        let next = Self::from_step(step);
        let valid = matches!(
            (self, next),
            (Uninitialized, Uninitialized)
                | (Uninitialized, Bootstrapped)
                | (Bootstrapped, Rolling)
                | (Rolling, Rolling)
        );
        assert!(
            valid,
            "wake cannot move from {:?} to {:?} at step {}",
            self, next, step
        );
        next
    }
}

/// Free vortex nodes shed from the edge, newest first.
///
/// Positions live in a buffer of fixed capacity; only the first `active`
/// entries take part in the dynamics. `mu` holds one value per segment
/// between consecutive nodes and `gamma` one value per node.
#[derive(Clone, Debug)]
pub struct Wake {
    // Convection speed, used to seed the buffer on bootstrap.
    pub v0: f64,
    pub(crate) nodes: Vec<Point2<f64>>,
    pub(crate) mu: Vec<f64>,
    pub(crate) gamma: Vec<f64>,
    pub(crate) active: usize,
    pub(crate) phase: WakePhase,
    pub(crate) last_step: Option<usize>,
}

impl Wake {
    pub fn new(capacity: usize, v0: f64) -> Self {
        assert!(capacity >= 2, "wake capacity must be at least 2");
        debug!("Wake::new(capacity={}, v0={})", capacity, v0);
        Wake {
            v0,
            nodes: vec![Point2::origin(); capacity],
            mu: vec![0.0; capacity - 1],
            gamma: vec![0.0; capacity],
            active: 0,
            phase: WakePhase::Uninitialized,
            last_step: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> WakePhase {
        self.phase
    }

    pub fn last_step(&self) -> Option<usize> {
        self.last_step
    }

    pub fn nodes(&self) -> &[Point2<f64>] {
        &self.nodes[..self.active]
    }

    // The whole buffer, including seeded slots not yet in use.
    pub fn buffer(&self) -> &[Point2<f64>] {
        &self.nodes
    }

    pub fn mu(&self) -> &[f64] {
        &self.mu[..self.active.saturating_sub(1)]
    }

    pub fn gamma(&self) -> &[f64] {
        &self.gamma[..self.active]
    }
}

#[derive(Clone, Debug)]
pub struct SimState {
    pub body: Body,
    pub edge: Edge,
    pub wake: Wake,
    pub t: f64,
    pub step: usize,
}

impl SimState {
    pub fn new(body: Body, edge: Edge, wake: Wake) -> SimState {
        SimState {
            body,
            edge,
            wake,
            t: 0.0,
            step: 0,
        }
    }
}

// A step summary is a summary of what happened or was computed during a single step.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct StepSummary {
    pub step: usize,
    pub t: f64,
    pub phase: WakePhase,
    // Number of wake nodes advected by rollup.
    pub n_advected: usize,
    pub max_induced_speed: f64,
}
