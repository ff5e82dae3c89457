pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("degenerate panel {index}: length {length}")]
    DegenerateGeometry { index: usize, length: f64 },
    #[error("{name} has {got} entries, expected {expected}")]
    StrengthShape {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("simulation diverged at step {step}: non-finite induced velocity on wake node {node}")]
    Divergence { step: usize, node: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SimError::Config(msg.into())
    }
}
