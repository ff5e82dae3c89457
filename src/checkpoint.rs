//! Per-step snapshots for downstream consumers, written as JSON lines.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use nalgebra::{Point2, Vector2};

use crate::error::SimResult;
use crate::state::{SimState, StepSummary};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub summary: StepSummary,
    pub surface: Vec<Point2<f64>>,
    pub collocation: Vec<Point2<f64>>,
    pub collocation_velocity: Vec<Vector2<f64>>,
    pub sigma: Vec<f64>,
    pub gamma: Vec<f64>,
    pub edge_nodes: [Point2<f64>; 2],
    pub edge_mu: f64,
    pub wake_nodes: Vec<Point2<f64>>,
    pub wake_mu: Vec<f64>,
    pub wake_gamma: Vec<f64>,
}

impl Snapshot {
    pub fn capture(sim_state: &SimState, summary: &StepSummary) -> Self {
        let SimState {
            body, edge, wake, ..
        } = sim_state;
        Snapshot {
            summary: summary.clone(),
            surface: body.surface.clone(),
            collocation: body.collocation.clone(),
            collocation_velocity: body.collocation_velocity.clone(),
            sigma: body.sigma.iter().copied().collect(),
            gamma: body.gamma.iter().copied().collect(),
            edge_nodes: edge.nodes,
            edge_mu: edge.mu,
            wake_nodes: wake.nodes().to_vec(),
            wake_mu: wake.mu().to_vec(),
            wake_gamma: wake.gamma().to_vec(),
        }
    }
}

pub struct CheckpointWriter<W: Write> {
    writer: W,
}

impl CheckpointWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> CheckpointWriter<W> {
    pub fn new(writer: W) -> Self {
        CheckpointWriter { writer }
    }

    pub fn write_checkpoint(&mut self, sim_state: &SimState, summary: &StepSummary) -> SimResult<()> {
        serde_json::to_writer(&mut self.writer, &Snapshot::capture(sim_state, summary))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> SimResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn read_checkpoints<R: BufRead>(reader: R) -> SimResult<Vec<Snapshot>> {
    let mut snapshots = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        snapshots.push(serde_json::from_str(&line)?);
    }
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::profile::BodyProfile;
    use crate::state::{Body, Edge, Wake, WakePhase};

    #[test]
    fn test_snapshot_lines() {
        let body = Body::new(vec![], -1.0, BodyProfile::naca_symmetric(1.0, 0.1, 8).unwrap());
        let state = SimState::new(body, Edge::new(0.4), Wake::new(4, -1.0));
        let summary = StepSummary {
            step: 0,
            t: 0.0,
            phase: WakePhase::Uninitialized,
            n_advected: 0,
            max_induced_speed: 0.0,
        };
        let mut writer = CheckpointWriter::new(Vec::new());
        writer.write_checkpoint(&state, &summary).unwrap();
        writer.write_checkpoint(&state, &summary).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 2);

        let snapshots = read_checkpoints(bytes.as_slice()).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0], Snapshot::capture(&state, &summary));
        assert!(snapshots[0].wake_nodes.is_empty());
    }
}
