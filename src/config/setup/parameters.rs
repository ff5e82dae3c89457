use self::{cycle::CycleParams, simulation::SimParams};

pub mod body;
pub mod cycle;
pub mod motion;
pub mod simulation;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ParametersYaml {
    Simulation(SimParams),
    Cycle(CycleParams),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Parameters {
    pub sim_params: SimParams,
    pub cycle_params: Option<CycleParams>,
}
