use serde::{Deserialize, Serialize};

use super::DistanceFunction;
use crate::models::{
    common::{check_same_len, LinalgError, Result},
    norm::norm2,
};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct AngleDistance;

impl DistanceFunction for AngleDistance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dist_angle(x, y)
    }
}

/// Angle between `x` and `y` in radians, in `[0, pi]`.
///
/// Fails with `InvalidInput` when either vector has zero length, since
/// the angle is undefined there.
pub fn dist_angle(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    let cosine = cosine_similarity_normalized(x, y, norm2(x), norm2(y))?;
    Ok(cosine.acos())
}

// Dot product of `x / |x|` and `y / |y|`, clamped to [-1, 1] for `acos`.
fn cosine_similarity_normalized(x: &[f64], y: &[f64], x_mag: f64, y_mag: f64) -> Result<f64> {
    if x_mag == 0.0 || y_mag == 0.0 {
        return Err(LinalgError::InvalidInput(
            "angle is undefined for a zero vector".to_string(),
        ));
    }
    let cosine = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| (a / x_mag) * (b / y_mag))
        .sum::<f64>();
    Ok(cosine.clamp(-1.0, 1.0))
}
