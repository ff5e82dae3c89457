use crate::error::{SimError, SimResult};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SimParams {
    // Time step.
    pub dt: f64,
    // Total number of steps, which is also the wake buffer capacity.
    pub n_steps: usize,
    // Inward shift of collocation points, as a fraction of local half-thickness.
    pub collocation_offset: f64,
    // Finite-difference steps along the neutral axis and in time.
    pub dstep: f64,
    pub tstep: f64,
    // Edge panel length, in units of one step's convection distance.
    pub edge_coefficient: f64,
    // Vortex core regularisation radius.
    pub delta_core: f64,
}

fn check_positive(name: &str, v: f64) -> SimResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(SimError::config(format!("{} must be positive, got {}", name, v)))
    }
}

impl SimParams {
    pub fn validate(&self) -> SimResult<()> {
        check_positive("dt", self.dt)?;
        check_positive("dstep", self.dstep)?;
        check_positive("tstep", self.tstep)?;
        check_positive("edge_coefficient", self.edge_coefficient)?;
        check_positive("delta_core", self.delta_core)?;
        if !self.collocation_offset.is_finite() {
            return Err(SimError::config("collocation_offset must be finite"));
        }
        if self.n_steps < 2 {
            return Err(SimError::config(format!(
                "n_steps must be at least 2, got {}",
                self.n_steps
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_params() -> SimParams {
    SimParams {
        dt: 0.01,
        n_steps: 8,
        collocation_offset: 0.01,
        dstep: 1e-5,
        tstep: 1e-5,
        edge_coefficient: 0.4,
        delta_core: 0.05,
    }
}
