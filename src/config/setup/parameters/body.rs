use super::motion::MotionComponent;
use crate::error::{SimError, SimResult};
use crate::geometry::profile::BodyProfile;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub chord: f64,
    // Maximum thickness as a fraction of chord.
    pub thickness: f64,
    pub n_panels: usize,
    // Convection speed; the body translates by v0 * t along x.
    pub v0: f64,
    #[serde(default)]
    pub motions: Vec<MotionComponent>,
}

impl BodyConfig {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.chord.is_finite() && self.chord > 0.0) {
            return Err(SimError::config(format!("chord must be positive, got {}", self.chord)));
        }
        if !(self.thickness > 0.0 && self.thickness < 1.0) {
            return Err(SimError::config(format!(
                "thickness must lie in (0, 1), got {}",
                self.thickness
            )));
        }
        if self.n_panels < 4 || self.n_panels % 2 != 0 {
            return Err(SimError::config(format!(
                "n_panels must be even and at least 4, got {}",
                self.n_panels
            )));
        }
        if !self.v0.is_finite() {
            return Err(SimError::config("v0 must be finite"));
        }
        for m in &self.motions {
            match m {
                MotionComponent::Pitch { theta_max, f, phi } => {
                    if !(theta_max.is_finite() && f.is_finite() && phi.is_finite()) {
                        return Err(SimError::config(format!("non-finite motion {:?}", m)));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn profile(&self) -> SimResult<BodyProfile> {
        BodyProfile::naca_symmetric(self.chord, self.thickness, self.n_panels)
    }

    // Frequency of the first motion component, which sets the cycle length.
    pub fn frequency(&self) -> Option<f64> {
        self.motions.first().map(|m| m.frequency())
    }

    pub fn reduced_frequency(&self) -> Option<f64> {
        self.frequency()
            .map(|f| std::f64::consts::PI * f * self.chord / self.v0.abs())
    }
}
