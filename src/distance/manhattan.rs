use serde::{Deserialize, Serialize};

use super::DistanceFunction;
use crate::models::common::{check_same_len, Result};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct Norm1Distance;

impl DistanceFunction for Norm1Distance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dist_norm1(x, y)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct SquaredNorm1Distance;

impl DistanceFunction for SquaredNorm1Distance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        squared_dist_norm1(x, y)
    }
}

/// Sum of absolute differences.
pub fn dist_norm1(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| (a - b).abs())
        .sum::<f64>())
}

/// Square of the 1-norm distance, `(sum |x_i - y_i|)^2`.
///
/// Note this is not the sum of squared differences that
/// [`squared_dist_norm2`](super::squared_dist_norm2) returns.
pub fn squared_dist_norm1(x: &[f64], y: &[f64]) -> Result<f64> {
    let d = dist_norm1(x, y)?;
    Ok(d * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::LinalgError;
    use crate::models::norm::norm1;

    #[test]
    fn test_dist_norm1() {
        assert_eq!(dist_norm1(&[1.0, -2.0, 3.0], &[0.0, 2.0, 3.0]), Ok(5.0));
        assert_eq!(dist_norm1(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_dist_norm1_is_norm1_of_difference() {
        let x = [0.25, -8.0, 3.5, 1e3];
        let y = [1.0, 2.0, -3.0, 7.0];
        let diff: Vec<f64> = x.iter().zip(y.iter()).map(|(a, b)| a - b).collect();
        assert_eq!(dist_norm1(&x, &y), Ok(norm1(&diff)));
    }

    #[test]
    fn test_squared_dist_norm1_squares_the_sum() {
        // |1| + |2| = 3, squared is 9; the sum of squares would be 5.
        assert_eq!(squared_dist_norm1(&[1.0, 2.0], &[0.0, 0.0]), Ok(9.0));
        assert_eq!(
            super::super::squared_dist_norm2(&[1.0, 2.0], &[0.0, 0.0]),
            Ok(5.0)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let err = Err(LinalgError::LengthMismatch {
            expected: 3,
            actual: 2,
        });
        assert_eq!(dist_norm1(&[1.0, 2.0, 3.0], &[1.0, 2.0]), err);
        assert_eq!(squared_dist_norm1(&[1.0, 2.0, 3.0], &[1.0, 2.0]), err);
    }

    #[test]
    fn test_unit_struct_delegates() {
        assert_eq!(Norm1Distance.calculate(&[2.0], &[-1.0]), Ok(3.0));
        assert_eq!(SquaredNorm1Distance.calculate(&[2.0], &[-1.0]), Ok(9.0));
    }
}
