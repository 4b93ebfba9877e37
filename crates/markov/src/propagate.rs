//! Forward propagation of a state distribution through a chain.

use serde::Serialize;

use crate::error::MarkovError;
use crate::matrix::{ProbabilityVector, TransitionMatrix};

/// The distributions visited by [`iterate`], one per step.
///
/// Index 0 is the initial distribution; the trajectory is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarkovTrajectory {
    states: Vec<ProbabilityVector>,
}

impl MarkovTrajectory {
    /// Returns the number of steps taken (one less than the number of states).
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// Returns the initial distribution.
    pub fn initial(&self) -> &ProbabilityVector {
        &self.states[0]
    }

    /// Returns the distribution after the last step.
    pub fn last(&self) -> &ProbabilityVector {
        &self.states[self.states.len() - 1]
    }

    /// Returns the distribution after `t` steps, or `None` if `t > steps()`.
    pub fn get(&self, t: usize) -> Option<&ProbabilityVector> {
        self.states.get(t)
    }

    /// Returns all distributions in step order.
    pub fn states(&self) -> &[ProbabilityVector] {
        &self.states
    }
}

/// Advances a distribution by one step: `v'[j] = Σ_i v[i]·P[i][j]`.
///
/// # Errors
///
/// Returns [`MarkovError::DimensionMismatch`] if the vector length differs
/// from the number of states in the matrix.
pub fn step(
    matrix: &TransitionMatrix,
    vector: &ProbabilityVector,
) -> Result<ProbabilityVector, MarkovError> {
    check_dimensions(matrix, vector)?;
    Ok(ProbabilityVector::from_vec(apply(matrix, vector.as_slice())))
}

/// Applies [`step`] `steps` times starting from `initial`.
///
/// The returned trajectory has `steps + 1` entries and its first entry is
/// `initial` unchanged.
///
/// # Errors
///
/// Returns [`MarkovError::DimensionMismatch`] if the vector length differs
/// from the number of states in the matrix.
#[tracing::instrument(skip(matrix, initial), fields(n = matrix.n()))]
pub fn iterate(
    matrix: &TransitionMatrix,
    initial: &ProbabilityVector,
    steps: usize,
) -> Result<MarkovTrajectory, MarkovError> {
    check_dimensions(matrix, initial)?;
    let mut states = Vec::with_capacity(steps + 1);
    states.push(initial.clone());
    for _ in 0..steps {
        let next = apply(matrix, states[states.len() - 1].as_slice());
        states.push(ProbabilityVector::from_vec(next));
    }
    Ok(MarkovTrajectory { states })
}

/// Row-vector times matrix, accumulated row by row.
pub(crate) fn apply(matrix: &TransitionMatrix, v: &[f64]) -> Vec<f64> {
    let mut next = vec![0.0; matrix.n()];
    for (i, &vi) in v.iter().enumerate() {
        for (acc, &pij) in next.iter_mut().zip(matrix.row(i)) {
            *acc += vi * pij;
        }
    }
    next
}

fn check_dimensions(
    matrix: &TransitionMatrix,
    vector: &ProbabilityVector,
) -> Result<(), MarkovError> {
    if matrix.n() != vector.len() {
        return Err(MarkovError::DimensionMismatch {
            matrix: matrix.n(),
            vector: vector.len(),
        });
    }
    Ok(())
}
