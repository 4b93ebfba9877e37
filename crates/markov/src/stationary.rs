//! Fixed-count power iteration for the stationary distribution.

use serde::Serialize;
use stochlab_stats::max_abs_diff;
use tracing::debug;

use crate::matrix::{ProbabilityVector, TransitionMatrix};
use crate::propagate::apply;

/// Number of `π ← π·P` applications performed by [`stationary`].
pub const STATIONARY_ITERATIONS: usize = 300;

/// Approximate stationary distribution of a chain.
///
/// The estimate is whatever 300 power iterations from the uniform
/// distribution produce. No convergence test is made: periodic chains
/// (eigenvalue −1) or slowly mixing ones may still be far from a fixed point.
/// [`StationaryEstimate::residual`] measures how far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationaryEstimate {
    distribution: ProbabilityVector,
    iterations: usize,
}

impl StationaryEstimate {
    /// Returns the estimated distribution.
    pub fn distribution(&self) -> &ProbabilityVector {
        &self.distribution
    }

    /// Returns the number of iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Infinity-norm distance `‖π·P − π‖∞` for the given matrix.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` has a different number of states than the estimate.
    pub fn residual(&self, matrix: &TransitionMatrix) -> f64 {
        let pi = self.distribution.as_slice();
        max_abs_diff(&apply(matrix, pi), pi)
    }

    /// Consumes the estimate and returns the distribution.
    pub fn into_distribution(self) -> ProbabilityVector {
        self.distribution
    }
}

/// Estimates the stationary distribution by power iteration.
///
/// Starts from the uniform vector and applies the matrix exactly
/// [`STATIONARY_ITERATIONS`] times.
#[tracing::instrument(skip(matrix), fields(n = matrix.n()))]
pub fn stationary(matrix: &TransitionMatrix) -> StationaryEstimate {
    let mut pi = ProbabilityVector::uniform(matrix.n()).into_vec();
    for _ in 0..STATIONARY_ITERATIONS {
        pi = apply(matrix, &pi);
    }
    let estimate = StationaryEstimate {
        distribution: ProbabilityVector::from_vec(pi),
        iterations: STATIONARY_ITERATIONS,
    };
    debug!(residual = estimate.residual(matrix), "stationary estimate");
    estimate
}
