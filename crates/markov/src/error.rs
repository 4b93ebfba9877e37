//! Error types for the stochlab-markov crate.

/// Error type for all fallible operations in the stochlab-markov crate.
///
/// Indices carried by the variants are zero-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a chain with zero states is requested.
    #[error("chain must have at least one state")]
    EmptyData,

    /// Returned when the matrix does not have `expected` rows.
    #[error("matrix shape mismatch: expected {expected} rows, got {got}")]
    MatrixShape {
        /// Number of states the caller asked for.
        expected: usize,
        /// Number of rows supplied.
        got: usize,
    },

    /// Returned when a matrix row does not have `expected` entries.
    #[error("matrix shape mismatch: row {row} has {got} entries, expected {expected}")]
    RowLength {
        /// Offending row.
        row: usize,
        /// Number of states the caller asked for.
        expected: usize,
        /// Number of entries in the row.
        got: usize,
    },

    /// Returned when a probability vector does not have `expected` entries.
    #[error("vector length mismatch: expected {expected}, got {got}")]
    VectorLength {
        /// Number of states the caller asked for.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },

    /// Returned when a matrix entry is negative or non-finite.
    #[error("invalid value at P[{row}][{col}]: {value} (must be finite and >= 0)")]
    OutOfRange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a vector entry is negative or non-finite.
    #[error("invalid value at index {index}: {value} (must be finite and >= 0)")]
    VectorOutOfRange {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a matrix row does not sum to 1.
    ///
    /// This is recoverable: the caller may repair the row with
    /// [`normalize_row`](crate::normalize_row) once the user authorises it.
    #[error("row {row} sums to {sum}, expected 1 (tolerance 1e-6)")]
    RowSum {
        /// Offending row.
        row: usize,
        /// Computed row sum.
        sum: f64,
    },

    /// Returned when every entry of a probability vector is zero.
    #[error("initial vector cannot be all zeros")]
    Degenerate,

    /// Returned when a matrix and a vector describe chains of different sizes.
    #[error("dimension mismatch: matrix has {matrix} states, vector has {vector}")]
    DimensionMismatch {
        /// Number of states in the matrix.
        matrix: usize,
        /// Length of the vector.
        vector: usize,
    },
}

impl MarkovError {
    /// Returns `true` for the wrong-dimension family of errors.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyData
                | Self::MatrixShape { .. }
                | Self::RowLength { .. }
                | Self::VectorLength { .. }
                | Self::DimensionMismatch { .. }
        )
    }

    /// Returns `true` for the out-of-domain value family of errors.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::VectorOutOfRange { .. }
        )
    }
}
