pub struct RunParams {
    // Step index at which the run stops.
    pub n_steps: usize,
    // Write a checkpoint every this many steps; zero means every step.
    pub dstep_view: usize,
}
