pub mod angle;
pub mod chebyshev;
pub mod euclidean;
pub mod manhattan;
pub mod tanimoto;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::common::{LinalgError, Result};

pub use angle::{dist_angle, AngleDistance};
pub use chebyshev::{dist_inf_norm, InfNormDistance};
pub use euclidean::{dist_norm2, squared_dist_norm2, Norm2Distance, SquaredNorm2Distance};
pub use manhattan::{dist_norm1, squared_dist_norm1, Norm1Distance, SquaredNorm1Distance};
pub use tanimoto::{dist_tanimoto, TanimotoDistance};

/// A pure binary function over two equal-length vectors.
///
/// Search routines call `calculate(column, query)` in that order, so
/// asymmetric implementations see the matrix column first.
pub trait DistanceFunction: Send + Sync {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64>;
}

impl<F> DistanceFunction for F
where
    F: Fn(&[f64], &[f64]) -> Result<f64> + Send + Sync,
{
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        self(x, y)
    }
}

/// The built-in metrics, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    DistNorm1,
    DistNorm2,
    SquaredDistNorm1,
    SquaredDistNorm2,
    DistInfNorm,
    DistAngle,
    DistTanimoto,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::DistNorm1,
        Metric::DistNorm2,
        Metric::SquaredDistNorm1,
        Metric::SquaredDistNorm2,
        Metric::DistInfNorm,
        Metric::DistAngle,
        Metric::DistTanimoto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::DistNorm1 => "dist_norm1",
            Metric::DistNorm2 => "dist_norm2",
            Metric::SquaredDistNorm1 => "squared_dist_norm1",
            Metric::SquaredDistNorm2 => "squared_dist_norm2",
            Metric::DistInfNorm => "dist_inf_norm",
            Metric::DistAngle => "dist_angle",
            Metric::DistTanimoto => "dist_tanimoto",
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::DistNorm2
    }
}

impl DistanceFunction for Metric {
    fn calculate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        match self {
            Metric::DistNorm1 => dist_norm1(x, y),
            Metric::DistNorm2 => dist_norm2(x, y),
            Metric::SquaredDistNorm1 => squared_dist_norm1(x, y),
            Metric::SquaredDistNorm2 => squared_dist_norm2(x, y),
            Metric::DistInfNorm => dist_inf_norm(x, y),
            Metric::DistAngle => dist_angle(x, y),
            Metric::DistTanimoto => dist_tanimoto(x, y),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = LinalgError;

    /// Accepts the function name with or without a `linalg.` schema
    /// prefix, case-insensitively. `norm1`/`norm2` are aliases for the
    /// matching distances.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().to_ascii_lowercase();
        let name = trimmed.strip_prefix("linalg.").unwrap_or(&trimmed);
        match name {
            "norm1" => return Ok(Metric::DistNorm1),
            "norm2" => return Ok(Metric::DistNorm2),
            _ => {}
        }
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| {
                LinalgError::InvalidDistanceFunction(format!("unknown distance function '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_str() {
        assert_eq!("dist_norm2".parse::<Metric>(), Ok(Metric::DistNorm2));
        assert_eq!("linalg.dist_norm1".parse::<Metric>(), Ok(Metric::DistNorm1));
        assert_eq!(" Squared_Dist_Norm2 ".parse::<Metric>(), Ok(Metric::SquaredDistNorm2));
        assert_eq!("norm1".parse::<Metric>(), Ok(Metric::DistNorm1));
        assert!(matches!(
            "dist_cosine".parse::<Metric>(),
            Err(LinalgError::InvalidDistanceFunction(_))
        ));
    }

    #[test]
    fn test_metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>(), Ok(metric));
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.name()));
        }
    }

    #[test]
    fn test_metric_dispatch() {
        let x = [1.0, 2.0];
        let y = [4.0, 6.0];
        assert_eq!(Metric::DistNorm1.calculate(&x, &y), Ok(7.0));
        assert_eq!(Metric::DistNorm2.calculate(&x, &y), Ok(5.0));
        assert_eq!(Metric::SquaredDistNorm1.calculate(&x, &y), Ok(49.0));
        assert_eq!(Metric::SquaredDistNorm2.calculate(&x, &y), Ok(25.0));
        assert_eq!(Metric::DistInfNorm.calculate(&x, &y), Ok(4.0));
    }

    #[test]
    fn test_closure_is_a_distance_function() {
        let first_diff = |x: &[f64], y: &[f64]| -> Result<f64> { Ok(x[0] - y[0]) };
        assert_eq!(first_diff.calculate(&[3.0], &[1.0]), Ok(2.0));

        let boxed: Box<dyn DistanceFunction> = Box::new(Metric::DistNorm2);
        assert_eq!(boxed.calculate(&[0.0], &[2.0]), Ok(2.0));
    }
}
