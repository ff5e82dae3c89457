use super::simulation::SimParams;
use crate::error::{SimError, SimResult};

// Parameters given per motion cycle rather than per step.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct CycleParams {
    pub steps_per_cycle: usize,
    pub n_cycles: usize,
    pub collocation_offset: f64,
    pub dstep: f64,
    pub tstep: f64,
    pub edge_coefficient: f64,
    pub delta_core: f64,
}

impl CycleParams {
    pub fn as_params(&self, frequency: f64) -> SimResult<SimParams> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(SimError::config(format!(
                "cycle parameters need a positive motion frequency, got {}",
                frequency
            )));
        }
        if self.steps_per_cycle == 0 {
            return Err(SimError::config("steps_per_cycle must be positive"));
        }
        Ok(SimParams {
            dt: 1.0 / (frequency * self.steps_per_cycle as f64),
            // One extra step for the geometry initialisation step.
            n_steps: self.steps_per_cycle * self.n_cycles + 1,
            collocation_offset: self.collocation_offset,
            dstep: self.dstep,
            tstep: self.tstep,
            edge_coefficient: self.edge_coefficient,
            delta_core: self.delta_core,
        })
    }
}
