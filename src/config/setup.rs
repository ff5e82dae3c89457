pub mod parameters;
pub mod strengths;

use std::{fs::File, io::Read, path::Path};

use log::info;

use crate::error::{SimError, SimResult};
use crate::state::{Body, Edge, SimState, Wake};

use self::parameters::{body::BodyConfig, Parameters, ParametersYaml};
use self::strengths::StrengthsConfig;

#[derive(serde::Serialize, serde::Deserialize)]
struct ConfigYaml {
    parameters: ParametersYaml,
    body: BodyConfig,
    #[serde(default)]
    strengths: StrengthsConfig,
}

pub struct SetupConfig {
    pub parameters: Parameters,
    pub body: BodyConfig,
    pub strengths: StrengthsConfig,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::parse_str(&contents)
    }

    pub fn parse_str(contents: &str) -> SimResult<Self> {
        let config_raw: ConfigYaml = serde_yaml::from_str(contents)?;
        config_raw.body.validate()?;
        let parameters = match config_raw.parameters {
            ParametersYaml::Simulation(sim_params) => Parameters {
                sim_params,
                cycle_params: None,
            },
            ParametersYaml::Cycle(cycle_params) => {
                let f = config_raw.body.frequency().ok_or_else(|| {
                    SimError::config("cycle parameters need at least one motion component")
                })?;
                Parameters {
                    sim_params: cycle_params.as_params(f)?,
                    cycle_params: Some(cycle_params),
                }
            }
        };
        parameters.sim_params.validate()?;
        Ok(SetupConfig {
            parameters,
            body: config_raw.body,
            strengths: config_raw.strengths,
        })
    }

    pub fn initialize_state(&self) -> SimResult<SimState> {
        let sim_params = &self.parameters.sim_params;
        let body = Body::new(self.body.motions.clone(), self.body.v0, self.body.profile()?);
        let edge = Edge::new(sim_params.edge_coefficient);
        let wake = Wake::new(sim_params.n_steps, self.body.v0);
        Ok(SimState::new(body, edge, wake))
    }

    pub fn print(&self) {
        if let Some(cycle_params) = &self.parameters.cycle_params {
            info!(
                "\
Cycle parameters:
  Steps per cycle: {steps_per_cycle}
  Cycles: {n_cycles}",
                steps_per_cycle = cycle_params.steps_per_cycle,
                n_cycles = cycle_params.n_cycles,
            );
        }
        let sim_params = &self.parameters.sim_params;
        info!(
            "\
Simulation:
  Timestep: {dt}
  Steps: {n_steps}
  Edge panel coefficient: {ce}
  Vortex core radius: {delta_core}

Body:
  Chord: {chord}
  Thickness: {thickness}
  Panels: {n_panels}
  Convection speed: {v0}
  Motion components: {n_motions}

Computed derived parameters (for info only):
  Simulated time: {t_total:.3}
  Edge panel length: {edge_length:.3e}
  Reduced frequency: {k}",
            dt = sim_params.dt,
            n_steps = sim_params.n_steps,
            ce = sim_params.edge_coefficient,
            delta_core = sim_params.delta_core,
            chord = self.body.chord,
            thickness = self.body.thickness,
            n_panels = self.body.n_panels,
            v0 = self.body.v0,
            n_motions = self.body.motions.len(),
            t_total = sim_params.dt * sim_params.n_steps as f64,
            edge_length = sim_params.edge_coefficient * self.body.v0.abs() * sim_params.dt,
            k = self
                .body
                .reduced_frequency()
                .map_or("n/a".to_string(), |k| format!("{:.3}", k)),
        );
    }
}
