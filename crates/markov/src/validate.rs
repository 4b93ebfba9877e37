//! Validation and explicit repair of chain inputs.
//!
//! Validation never changes caller data. A matrix row that does not sum to 1
//! is reported as [`MarkovError::RowSum`]; only [`normalize_row`] and
//! [`normalize_matrix`], called after the user has agreed to it, turn such a
//! row into a distribution.

use tracing::debug;

use crate::error::MarkovError;
use crate::matrix::{ProbabilityVector, TransitionMatrix};

/// Allowed deviation of a matrix row sum from 1.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Validates a raw n×n matrix as a transition matrix.
///
/// Checks, in order: the shape, that every entry is finite and non-negative,
/// and that every row sums to 1 within [`ROW_SUM_TOLERANCE`].
///
/// # Errors
///
/// - [`MarkovError::EmptyData`] if `n == 0`.
/// - [`MarkovError::MatrixShape`] / [`MarkovError::RowLength`] if `raw` is not n×n.
/// - [`MarkovError::OutOfRange`] for the first negative or non-finite entry.
/// - [`MarkovError::RowSum`] for the first row whose sum is off. This one is
///   recoverable through [`normalize_row`].
pub fn validate_matrix<R: AsRef<[f64]>>(
    raw: &[R],
    n: usize,
) -> Result<TransitionMatrix, MarkovError> {
    check_entries(raw, n)?;
    for (row, values) in raw.iter().enumerate() {
        let sum = row_sum(values.as_ref());
        if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(MarkovError::RowSum { row, sum });
        }
    }
    Ok(TransitionMatrix::from_rows(raw))
}

/// Rescales a row into a probability distribution.
///
/// A row summing to zero becomes uniform; any other row is divided by its
/// sum. The row is expected to have passed the range check already. Returns
/// a corrected copy.
pub fn normalize_row(row: &[f64]) -> Vec<f64> {
    scale_to_unit(row).unwrap_or_else(|| vec![1.0 / row.len() as f64; row.len()])
}

/// Validates a raw matrix, normalizing every row whose sum is off.
///
/// Rows already within [`ROW_SUM_TOLERANCE`] are kept exactly as given.
///
/// # Errors
///
/// Same shape and range errors as [`validate_matrix`]; never
/// [`MarkovError::RowSum`].
pub fn normalize_matrix<R: AsRef<[f64]>>(
    raw: &[R],
    n: usize,
) -> Result<TransitionMatrix, MarkovError> {
    check_entries(raw, n)?;
    let rows: Vec<Vec<f64>> = raw
        .iter()
        .enumerate()
        .map(|(row, values)| {
            let values = values.as_ref();
            let sum = row_sum(values);
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                debug!(row, sum, "normalizing matrix row");
                normalize_row(values)
            } else {
                values.to_vec()
            }
        })
        .collect();
    Ok(TransitionMatrix::from_rows(&rows))
}

/// Validates a raw initial distribution and rescales it to sum to 1.
///
/// # Errors
///
/// - [`MarkovError::EmptyData`] if `n == 0`.
/// - [`MarkovError::VectorLength`] if `raw.len() != n`.
/// - [`MarkovError::VectorOutOfRange`] for the first negative or non-finite entry.
/// - [`MarkovError::Degenerate`] if every entry is zero.
pub fn validate_vector(raw: &[f64], n: usize) -> Result<ProbabilityVector, MarkovError> {
    if n == 0 {
        return Err(MarkovError::EmptyData);
    }
    if raw.len() != n {
        return Err(MarkovError::VectorLength {
            expected: n,
            got: raw.len(),
        });
    }
    for (index, &value) in raw.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(MarkovError::VectorOutOfRange { index, value });
        }
    }
    scale_to_unit(raw)
        .map(ProbabilityVector::from_vec)
        .ok_or(MarkovError::Degenerate)
}

/// Divides finite, non-negative values by their sum; `None` if they are all
/// zero. A sum that overflows is taken again after dividing by the largest
/// value.
fn scale_to_unit(values: &[f64]) -> Option<Vec<f64>> {
    let sum = row_sum(values);
    if sum == 0.0 {
        return None;
    }
    if sum.is_finite() {
        return Some(values.iter().map(|&p| p / sum).collect());
    }
    let max = values.iter().copied().fold(0.0, f64::max);
    let scaled: Vec<f64> = values.iter().map(|&p| p / max).collect();
    let sum = row_sum(&scaled);
    Some(scaled.iter().map(|&p| p / sum).collect())
}

/// Shape and range checks shared by the matrix entry points.
fn check_entries<R: AsRef<[f64]>>(raw: &[R], n: usize) -> Result<(), MarkovError> {
    if n == 0 {
        return Err(MarkovError::EmptyData);
    }
    if raw.len() != n {
        return Err(MarkovError::MatrixShape {
            expected: n,
            got: raw.len(),
        });
    }
    for (row, values) in raw.iter().enumerate() {
        let values = values.as_ref();
        if values.len() != n {
            return Err(MarkovError::RowLength {
                row,
                expected: n,
                got: values.len(),
            });
        }
    }
    for (row, values) in raw.iter().enumerate() {
        for (col, &value) in values.as_ref().iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(MarkovError::OutOfRange { row, col, value });
            }
        }
    }
    Ok(())
}

/// Left-to-right sum, matching the order the rows are entered in.
fn row_sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &p| acc + p)
}
