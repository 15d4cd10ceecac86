//! Entry points shaped like host database functions.
//!
//! Host arguments may be NULL, which is distinct from an empty array:
//! `None` fails with `NullInput`, `Some(&[])` computes over nothing. The
//! distance argument is a function name resolved through [`Metric`].

use crate::distance::{self, Metric};
use crate::models::common::{require, Result};
use crate::models::norm;
use crate::models::types::{ColumnMatch, ColumnMatches, Matrix};
use crate::search;

pub fn norm1(x: Option<&[f64]>) -> Result<f64> {
    Ok(norm::norm1(require(x, "x")?))
}

pub fn norm2(x: Option<&[f64]>) -> Result<f64> {
    Ok(norm::norm2(require(x, "x")?))
}

pub fn norm_inf(x: Option<&[f64]>) -> Result<f64> {
    Ok(norm::norm_inf(require(x, "x")?))
}

macro_rules! pairwise_udf {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(x: Option<&[f64]>, y: Option<&[f64]>) -> Result<f64> {
                distance::$name(require(x, "x")?, require(y, "y")?)
            }
        )*
    };
}

pairwise_udf!(
    dist_norm1,
    dist_norm2,
    squared_dist_norm1,
    squared_dist_norm2,
    dist_inf_norm,
    dist_angle,
    dist_tanimoto,
);

/// Resolves a distance function reference such as `"linalg.dist_norm2"`.
pub fn resolve_metric(dist: Option<&str>) -> Result<Metric> {
    require(dist, "dist")?.parse()
}

pub fn closest_column(
    m: Option<&Matrix>,
    x: Option<&[f64]>,
    dist: Option<&str>,
) -> Result<ColumnMatch> {
    let m = require(m, "m")?;
    let x = require(x, "x")?;
    let metric = resolve_metric(dist)?;
    search::closest_column(m, x, &metric)
}

pub fn closest_columns(
    m: Option<&Matrix>,
    x: Option<&[f64]>,
    n: Option<usize>,
    dist: Option<&str>,
) -> Result<ColumnMatches> {
    let m = require(m, "m")?;
    let x = require(x, "x")?;
    let n = *require(n.as_ref(), "n")?;
    let metric = resolve_metric(dist)?;
    search::closest_columns(m, x, n, &metric)
}
