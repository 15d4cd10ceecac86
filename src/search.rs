//! Nearest-column search over a matrix with a caller-supplied metric.
//!
//! Every column is evaluated (metrics are arbitrary, so there is no
//! early exit) with `dist.calculate(column, query)`. Ties resolve to the
//! smallest column index.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::distance::DistanceFunction;
use crate::models::common::{LinalgError, Result};
use crate::models::types::{ColumnMatch, ColumnMatches, Matrix};

fn validate(m: &Matrix, x: &[f64]) -> Result<()> {
    if m.is_empty() {
        log::debug!("closest column search rejected: matrix has no columns");
        return Err(LinalgError::EmptyMatrix);
    }
    if m.rows() != x.len() {
        log::debug!(
            "closest column search rejected: {} rows vs query of length {}",
            m.rows(),
            x.len()
        );
        return Err(LinalgError::LengthMismatch {
            expected: m.rows(),
            actual: x.len(),
        });
    }
    Ok(())
}

/// Returns the column of `m` nearest to `x` under `dist`.
///
/// Only a strictly smaller distance replaces the running minimum, so
/// the leftmost of several equal minima wins. A `NaN` distance is
/// replaced by any non-`NaN` one; if all are `NaN`, column 0 is
/// reported. Errors from `dist` abort the scan unchanged.
pub fn closest_column<D>(m: &Matrix, x: &[f64], dist: &D) -> Result<ColumnMatch>
where
    D: DistanceFunction + ?Sized,
{
    validate(m, x)?;

    let mut best = ColumnMatch {
        column_id: 0,
        distance: dist.calculate(m.column(0), x)?,
    };
    for (column_id, column) in m.columns().enumerate().skip(1) {
        let distance = dist.calculate(column, x)?;
        if distance < best.distance || (best.distance.is_nan() && !distance.is_nan()) {
            best = ColumnMatch {
                column_id,
                distance,
            };
        }
    }

    log::debug!(
        "closest column {} of {} at distance {}",
        best.column_id,
        m.cols(),
        best.distance
    );
    Ok(best)
}

// NaN sorts after every number; otherwise the natural order. Equal
// values compare Equal so a stable sort keeps index order on ties.
fn cmp_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Returns the `n` columns nearest to `x`, nearest first, ties broken by
/// ascending column index. `n` larger than the column count is clamped.
pub fn closest_columns<D>(m: &Matrix, x: &[f64], n: usize, dist: &D) -> Result<ColumnMatches>
where
    D: DistanceFunction + ?Sized,
{
    if n == 0 {
        return Err(LinalgError::InvalidInput(
            "number of columns to return must be positive".to_string(),
        ));
    }
    validate(m, x)?;

    let mut scored = m
        .columns()
        .enumerate()
        .map(|(column_id, column)| {
            Ok(ColumnMatch {
                column_id,
                distance: dist.calculate(column, x)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| cmp_distance(a.distance, b.distance));
    scored.truncate(n);
    Ok(scored.into_iter().collect())
}

/// Runs [`closest_column`] for each query on the current rayon pool.
///
/// Results keep query order. When several queries fail, the error of the
/// first failing query (in query order) is returned.
pub fn closest_column_batch<D, Q>(
    m: &Matrix,
    queries: &[Q],
    dist: &D,
) -> Result<Vec<ColumnMatch>>
where
    D: DistanceFunction + ?Sized,
    Q: AsRef<[f64]> + Sync,
{
    log::debug!(
        "closest column batch: {} queries over {} columns",
        queries.len(),
        m.cols()
    );
    let results: Vec<Result<ColumnMatch>> = queries
        .par_iter()
        .map(|q| closest_column(m, q.as_ref(), dist))
        .collect();
    results.into_iter().collect()
}
