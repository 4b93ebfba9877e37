//! Row-stochastic transition matrices and probability vectors.

use serde::{Serialize, Serializer};

/// An n×n row-stochastic transition matrix.
///
/// Row `i` holds the probabilities of moving from state `i` to each state.
/// Instances come out of the validator ([`validate_matrix`] or
/// [`normalize_matrix`]) or [`TransitionMatrix::default_for`], so every entry
/// is finite and non-negative and every row sums to 1 within 1e-6.
///
/// [`validate_matrix`]: crate::validate_matrix
/// [`normalize_matrix`]: crate::normalize_matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    /// Row-major, length `n * n`.
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix from rows that have already been checked.
    pub(crate) fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let n = rows.len();
        let mut probs = Vec::with_capacity(n * n);
        for row in rows {
            probs.extend_from_slice(row.as_ref());
        }
        Self { n, probs }
    }

    /// The calculator's starting grid: 0.6 on the diagonal, the remaining
    /// 0.4 spread evenly over the other states.
    ///
    /// A single-state chain gets the 1×1 identity.
    pub fn default_for(n: usize) -> Self {
        let (stay, leave) = if n > 1 {
            (0.6, 0.4 / (n - 1) as f64)
        } else {
            (1.0, 0.0)
        };
        let mut probs = vec![leave; n * n];
        for i in 0..n {
            probs[i * n + i] = stay;
        }
        Self { n, probs }
    }

    /// Returns the number of states.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the transition probabilities out of state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= self.n()`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.probs[from * self.n..(from + 1) * self.n]
    }

    /// Returns the probability of moving from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.row(from)[to]
    }

    /// Iterates over the rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty matrix has no rows anyway.
        self.probs.chunks(self.n.max(1))
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Serialize for TransitionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// A distribution over the states of a chain at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Wraps values that are already a distribution (or an engine estimate of one).
    pub(crate) fn from_vec(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// The uniform distribution `1/n` over `n` states.
    pub fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    /// Returns the number of states.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no states.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the probability of state `i`, or `None` if out of bounds.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    /// Returns the probabilities as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all entries.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Consumes the vector and returns its values.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for ProbabilityVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_for_three_states() {
        let m = TransitionMatrix::default_for(3);
        assert_eq!(m.n(), 3);
        assert_eq!(m.row(0), &[0.6, 0.2, 0.2]);
        assert_eq!(m.row(1), &[0.2, 0.6, 0.2]);
        assert_eq!(m.row(2), &[0.2, 0.2, 0.6]);
    }

    #[test]
    fn default_for_rows_sum_to_one() {
        for n in 2..=8 {
            let m = TransitionMatrix::default_for(n);
            for row in m.rows() {
                let s: f64 = row.iter().sum();
                assert!((s - 1.0).abs() < 1e-12, "n={n}: row sums to {s}");
            }
        }
    }

    #[test]
    fn default_for_single_state() {
        let m = TransitionMatrix::default_for(1);
        assert_eq!(m.to_rows(), vec![vec![1.0]]);
    }

    #[test]
    fn row_and_prob_access() {
        let m = TransitionMatrix::from_rows(&[[0.5, 0.5], [0.1, 0.9]]);
        assert_eq!(m.row(1), &[0.1, 0.9]);
        assert!((m.prob(0, 1) - 0.5).abs() < 1e-12);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn to_rows_round_trips_input() {
        let rows = vec![vec![0.7, 0.3], vec![0.4, 0.6]];
        let m = TransitionMatrix::from_rows(&rows);
        assert_eq!(m.to_rows(), rows);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m = TransitionMatrix::default_for(0);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn uniform_vector() {
        let v = ProbabilityVector::uniform(4);
        assert_eq!(v.as_slice(), &[0.25; 4]);
        assert!((v.total() - 1.0).abs() < 1e-12);
        assert_eq!(v.get(4), None);
    }
}
