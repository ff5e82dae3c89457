use std::f64::consts::PI;

pub mod panel;
pub mod profile;

pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

// Chordwise samples clustered at both ends, running from `length` down to 0.
pub fn cosine_spacing(length: f64, n: usize) -> Vec<f64> {
    linspace(0.0, PI, n)
        .iter()
        .map(|beta| 0.5 * length * (1.0 + beta.cos()))
        .collect()
}
