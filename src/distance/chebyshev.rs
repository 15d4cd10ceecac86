use serde::{Deserialize, Serialize};

use super::DistanceFunction;
use crate::models::common::{check_same_len, Result};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct InfNormDistance;

impl DistanceFunction for InfNormDistance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dist_inf_norm(x, y)
    }
}

/// Largest absolute elementwise difference.
pub fn dist_inf_norm(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    let mut max = 0.0f64;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let diff = (a - b).abs();
        if diff.is_nan() {
            return Ok(f64::NAN);
        }
        if diff > max {
            max = diff;
        }
    }
    Ok(max)
}
