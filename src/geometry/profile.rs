use crate::error::{SimError, SimResult};

use super::cosine_spacing;

/// Reference samples of a body in its own frame, before any motion.
///
/// `x`/`z` hold the N + 1 surface points (longitudinal coordinate and signed
/// half-thickness), `x_col`/`z_col` the N panel midpoints.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BodyProfile {
    pub x: Vec<f64>,
    pub z: Vec<f64>,
    pub x_col: Vec<f64>,
    pub z_col: Vec<f64>,
}

// Symmetric NACA 4-digit half-thickness with a closed trailing edge.
pub fn naca_half_thickness(x: f64, chord: f64, thickness: f64) -> f64 {
    let xc = (x / chord).clamp(0.0, 1.0);
    let yt = 5.0
        * thickness
        * chord
        * (0.2969 * xc.sqrt() + (-0.1260 + (-0.3516 + (0.2843 - 0.1036 * xc) * xc) * xc) * xc);
    yt.max(0.0)
}

impl BodyProfile {
    pub fn from_points(x: Vec<f64>, z: Vec<f64>) -> SimResult<Self> {
        if x.len() != z.len() || x.len() < 3 {
            return Err(SimError::config(format!(
                "profile needs matching x/z samples with at least 3 points, got {} and {}",
                x.len(),
                z.len()
            )));
        }
        let x_col = x.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
        let z_col = z.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
        Ok(BodyProfile { x, z, x_col, z_col })
    }

    /// Closed symmetric foil, leading edge at x = 0 and trailing edge at
    /// x = chord. Points run from the trailing edge along the lower surface
    /// to the leading edge and back along the upper surface.
    pub fn naca_symmetric(chord: f64, thickness: f64, n_panels: usize) -> SimResult<Self> {
        if n_panels < 4 || n_panels % 2 != 0 {
            return Err(SimError::config(format!(
                "n_panels must be even and at least 4, got {}",
                n_panels
            )));
        }
        let half = cosine_spacing(chord, n_panels / 2 + 1);

        let lower = half.iter().map(|&x| (x, -naca_half_thickness(x, chord, thickness)));
        let upper = half
            .iter()
            .rev()
            .skip(1)
            .map(|&x| (x, naca_half_thickness(x, chord, thickness)));
        let (x, z) = lower.chain(upper).unzip();
        Self::from_points(x, z)
    }

    pub fn n_panels(&self) -> usize {
        self.x.len() - 1
    }
}
