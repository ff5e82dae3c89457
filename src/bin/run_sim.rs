use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flapwake::{
    checkpoint::CheckpointWriter,
    config::{run::RunParams, setup::SetupConfig},
    dynamics::run,
};
use log::{info, warn};

#[derive(Debug, clap::Parser)]
#[command(name = "flapwake_run", about = "Run a flapping-foil wake simulation...")]
pub struct RunCli {
    #[arg(short = 'c', long = "config")]
    pub config: PathBuf,

    #[arg(short = 'o', long = "output", default_value = "snapshots.jsonl")]
    pub output: PathBuf,

    #[arg(short = 'd', long = "dstep-view", default_value_t = 1)]
    pub dstep_view: usize,

    #[arg(short = 'n', long = "steps")]
    pub n_steps: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = RunCli::parse();

    let setup_config = SetupConfig::parse(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    setup_config.print();

    let sim_params = &setup_config.parameters.sim_params;
    let n_steps = match args.n_steps {
        Some(n) if n > sim_params.n_steps => {
            warn!(
                "Requested {} steps but the wake holds {}; the oldest nodes will be discarded",
                n, sim_params.n_steps
            );
            n
        }
        Some(n) => n,
        None => sim_params.n_steps,
    };
    let run_params = RunParams {
        n_steps,
        dstep_view: args.dstep_view,
    };

    let mut sim_state = setup_config.initialize_state()?;
    let mut solver = setup_config.strengths.solver();
    let mut writer = CheckpointWriter::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    run(
        sim_params,
        &mut sim_state,
        &run_params,
        solver.as_mut(),
        &mut writer,
    )?;
    info!(
        "Done! {} steps, {} wake nodes, snapshots in {}",
        sim_state.step,
        sim_state.wake.active(),
        args.output.display()
    );
    Ok(())
}
