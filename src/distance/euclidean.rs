use serde::{Deserialize, Serialize};

use super::DistanceFunction;
use crate::models::common::{check_same_len, Result};
use crate::models::norm::scaled_l2;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct Norm2Distance;

impl DistanceFunction for Norm2Distance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dist_norm2(x, y)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Serialize)]
pub struct SquaredNorm2Distance;

impl DistanceFunction for SquaredNorm2Distance {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        squared_dist_norm2(x, y)
    }
}

/// `norm2(x - y)` without materializing the difference vector.
pub fn dist_norm2(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    Ok(scaled_l2(x.iter().zip(y.iter()).map(|(&a, &b)| a - b)))
}

/// Sum of squared differences, accumulated directly (no sqrt round trip).
pub fn squared_dist_norm2(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .sum::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::LinalgError;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    // Three vectors of one shared random length.
    #[derive(Clone, Debug)]
    struct Triple(Vec<f64>, Vec<f64>, Vec<f64>);

    impl Arbitrary for Triple {
        fn arbitrary(g: &mut Gen) -> Self {
            let size = usize::arbitrary(g) % 12 + 1;
            let gen_vec = |g: &mut Gen| -> Vec<f64> {
                (0..size)
                    .map(|_| (i32::arbitrary(g) % 10_000) as f64 / 100.0)
                    .collect()
            };
            let x = gen_vec(g);
            let y = gen_vec(g);
            let z = gen_vec(g);
            Triple(x, y, z)
        }
    }

    #[test]
    fn test_dist_norm2() {
        assert_eq!(dist_norm2(&[1.0, 2.0], &[4.0, 6.0]), Ok(5.0));
        assert_eq!(dist_norm2(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_squared_dist_norm2() {
        assert_eq!(squared_dist_norm2(&[1.0, 2.0], &[4.0, 6.0]), Ok(25.0));
        assert_eq!(squared_dist_norm2(&[0.5], &[0.0]), Ok(0.25));
    }

    #[test]
    fn test_length_mismatch() {
        let err = Err(LinalgError::LengthMismatch {
            expected: 3,
            actual: 2,
        });
        assert_eq!(dist_norm2(&[1.0, 2.0, 3.0], &[1.0, 2.0]), err);
        assert_eq!(squared_dist_norm2(&[1.0, 2.0, 3.0], &[1.0, 2.0]), err);
    }

    #[test]
    fn test_dist_norm2_large_magnitudes() {
        let d = dist_norm2(&[f64::MAX / 2.0, 0.0], &[0.0, f64::MAX / 2.0]).unwrap();
        assert!(d.is_finite());
    }

    #[quickcheck]
    fn prop_dist_norm2_symmetric(t: Triple) -> bool {
        dist_norm2(&t.0, &t.1) == dist_norm2(&t.1, &t.0)
    }

    #[quickcheck]
    fn prop_dist_norm2_self_is_zero(t: Triple) -> bool {
        dist_norm2(&t.0, &t.0) == Ok(0.0)
    }

    #[quickcheck]
    fn prop_squared_matches_square_of_distance(t: Triple) -> bool {
        let d = dist_norm2(&t.0, &t.1).unwrap();
        let sq = squared_dist_norm2(&t.0, &t.1).unwrap();
        (sq - d * d).abs() <= 1e-9 * sq.max(1.0)
    }

    #[quickcheck]
    fn prop_triangle_inequality(t: Triple) -> bool {
        let xz = dist_norm2(&t.0, &t.2).unwrap();
        let xy = dist_norm2(&t.0, &t.1).unwrap();
        let yz = dist_norm2(&t.1, &t.2).unwrap();
        xz <= xy + yz + 1e-9 * (xy + yz).max(1.0)
    }

    #[quickcheck]
    fn prop_bit_identical_on_repeat(t: Triple) -> bool {
        dist_norm2(&t.0, &t.1).unwrap().to_bits() == dist_norm2(&t.0, &t.1).unwrap().to_bits()
            && squared_dist_norm2(&t.0, &t.1).unwrap().to_bits()
                == squared_dist_norm2(&t.0, &t.1).unwrap().to_bits()
    }
}
