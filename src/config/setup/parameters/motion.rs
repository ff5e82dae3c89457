use std::f64::consts::PI;

use nalgebra::{Point2, Rotation2};

/// One contribution to the prescribed rigid motion of the neutral axis.
///
/// Components are applied in order, each mapping a point of the neutral
/// axis to its displaced position at a given time.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum MotionComponent {
    Pitch { theta_max: f64, f: f64, phi: f64 },
}

impl MotionComponent {
    pub fn displace(&self, p: Point2<f64>, t: f64) -> Point2<f64> {
        match self {
            MotionComponent::Pitch { .. } => Rotation2::new(self.pitch_angle(t)) * p,
        }
    }

    pub fn pitch_angle(&self, t: f64) -> f64 {
        match self {
            MotionComponent::Pitch { theta_max, f, phi } => {
                theta_max * (2.0 * PI * f * t + phi).sin()
            }
        }
    }

    pub fn frequency(&self) -> f64 {
        match self {
            MotionComponent::Pitch { f, .. } => *f,
        }
    }
}
