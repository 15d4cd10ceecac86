use serde::{Deserialize, Serialize};

use super::DistanceFunction;
use crate::models::{
    common::{check_same_len, Result},
    norm::norm_inf,
};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct TanimotoDistance;

impl DistanceFunction for TanimotoDistance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dist_tanimoto(x, y)
    }
}

/// `1 - x.y / (|x|^2 + |y|^2 - x.y)`. Two zero vectors are at distance 0.
///
/// The ratio is scale invariant, so both vectors are divided by their
/// largest absolute element first to keep the products finite.
pub fn dist_tanimoto(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    let scale = norm_inf(x).max(norm_inf(y));
    if scale == 0.0 {
        return Ok(0.0);
    }
    let (mut xy, mut xx, mut yy) = (0.0f64, 0.0f64, 0.0f64);
    for (&a, &b) in x.iter().zip(y.iter()) {
        let (a, b) = (a / scale, b / scale);
        xy += a * b;
        xx += a * a;
        yy += b * b;
    }
    let denominator = xx + yy - xy;
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok(1.0 - xy / denominator)
}
