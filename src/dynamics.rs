pub mod body;
pub mod edge;
pub mod kinematics;
pub mod rollup;
pub mod solutions;
pub mod strengths;
pub mod wake;

use std::io::Write;

use log::{debug, info};

use crate::checkpoint::CheckpointWriter;
use crate::config::run::RunParams;
use crate::config::setup::parameters::simulation::SimParams;
use crate::error::SimResult;
use crate::state::{SimState, StepSummary};

use self::strengths::StrengthSolver;

/// Advance the simulation by one step.
///
/// Order within a step: body geometry and collocation velocities, strength
/// solve, edge shedding, wake shedding, then wake rollup.
///
/// On error the step counter is not advanced, but the body, edge and wake
/// may already hold this step's values; the state cannot be stepped again.
pub fn update(
    sim_params: &SimParams,
    sim_state: &mut SimState,
    solver: &mut dyn StrengthSolver,
) -> SimResult<StepSummary> {
    let (step, t, dt) = (sim_state.step, sim_state.t, sim_params.dt);
    let SimState {
        body, edge, wake, ..
    } = sim_state;

    body::rebuild_geometry(body, sim_params.collocation_offset, sim_params.dstep, t)?;
    body::compute_collocation_velocity(body, sim_params.dstep, sim_params.tstep, t)?;

    let strengths = solver.solve(body, wake, t)?;
    body.set_strengths(strengths.sigma, strengths.gamma)?;
    edge.mu = strengths.edge_mu;

    edge::shed_edge(body, edge, step, dt)?;
    wake::shed_wake(edge, wake, step, dt);
    let v = rollup::rollup_wake(body, edge, wake, sim_params.delta_core, step, dt)?;

    let summary = StepSummary {
        step,
        t,
        phase: wake.phase(),
        n_advected: v.len(),
        max_induced_speed: v.iter().map(|v_i| v_i.norm()).fold(0.0, f64::max),
    };
    debug!(
        "step={} t={} active_wake={} max_induced_speed={}",
        step,
        t,
        wake.active(),
        summary.max_induced_speed
    );

    // Advance time and step.
    sim_state.step += 1;
    sim_state.t = sim_state.step as f64 * dt;
    Ok(summary)
}

pub fn run<W: Write>(
    sim_params: &SimParams,
    sim_state: &mut SimState,
    run_params: &RunParams,
    solver: &mut dyn StrengthSolver,
    writer: &mut CheckpointWriter<W>,
) -> SimResult<()> {
    info!(
        "Running from step {} to step {}, t={}",
        sim_state.step, run_params.n_steps, sim_state.t
    );
    // A stride of zero checkpoints every step.
    let dstep_view = run_params.dstep_view.max(1);
    while sim_state.step < run_params.n_steps {
        let summary = update(sim_params, sim_state, solver)?;
        if summary.step % dstep_view == 0 {
            info!("CHECKPOINT: step={}, t={}", summary.step, summary.t);
            writer.write_checkpoint(sim_state, &summary)?;
        }
    }
    writer.flush()?;
    Ok(())
}
