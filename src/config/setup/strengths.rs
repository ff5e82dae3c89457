use crate::dynamics::strengths::{PrescribedStrengths, StrengthSolver};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum StrengthsConfig {
    Prescribed(PrescribedStrengths),
}

impl Default for StrengthsConfig {
    fn default() -> Self {
        StrengthsConfig::Prescribed(PrescribedStrengths::default())
    }
}

impl StrengthsConfig {
    pub fn solver(&self) -> Box<dyn StrengthSolver> {
        match self {
            StrengthsConfig::Prescribed(prescribed) => Box::new(prescribed.clone()),
        }
    }
}
