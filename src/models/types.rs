use serde::{Deserialize, Serialize};

use super::common::{LinalgError, Result};

/// Dense matrix of `f64` stored column-major, so every column is a
/// contiguous slice that can be handed to a distance kernel as-is.
///
/// The JSON form is row-major (`[[row0...], [row1...]]`), matching the
/// `M[row][col]` convention of host arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `rows` x 0 matrix. Valid to construct; rejected by search.
    pub fn empty(rows: usize) -> Self {
        Self {
            rows,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Builds a matrix from its columns. Every column must have the
    /// length of the first one.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let rows = columns.first().map_or(0, |c| c.len());
        let cols = columns.len();
        let mut data = Vec::with_capacity(rows * cols);
        for column in columns {
            if column.len() != rows {
                return Err(LinalgError::LengthMismatch {
                    expected: rows,
                    actual: column.len(),
                });
            }
            data.extend(column);
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from row-major nested rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(LinalgError::LengthMismatch {
                expected: n_cols,
                actual: bad.len(),
            });
        }
        let mut data = vec![0.0; n_rows * n_cols];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[j * n_rows + i] = value;
            }
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cols == 0
    }

    /// Column `j` as a contiguous slice. Panics if `j >= cols`.
    pub fn column(&self, j: usize) -> &[f64] {
        assert!(j < self.cols, "column index {} out of bounds", j);
        &self.data[j * self.rows..(j + 1) * self.rows]
    }

    pub fn columns(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.cols).map(move |j| self.column(j))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        (0..m.rows)
            .map(|i| (0..m.cols).map(|j| m.data[j * m.rows + i]).collect())
            .collect()
    }
}

/// Winning column of a closest-column search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnMatch {
    pub column_id: usize,
    pub distance: f64,
}

/// The `n` nearest columns, nearest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMatches {
    pub column_ids: Vec<usize>,
    pub distances: Vec<f64>,
}

impl FromIterator<ColumnMatch> for ColumnMatches {
    fn from_iter<I: IntoIterator<Item = ColumnMatch>>(iter: I) -> Self {
        let mut matches = ColumnMatches::default();
        for m in iter {
            matches.column_ids.push(m.column_id);
            matches.distances.push(m.distance);
        }
        matches
    }
}
