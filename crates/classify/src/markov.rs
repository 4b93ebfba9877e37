//! Convergence and dominant-state labels for Markov trajectories.

use serde::Serialize;
use stochlab_markov::ProbabilityVector;
use stochlab_stats::{argmax, max_abs_diff};

/// Largest per-state gap to the stationary estimate still counted as converged.
pub const CONVERGENCE_TOLERANCE: f64 = 0.02;

/// Interpretation of the last distribution of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkovClassification {
    /// Every state is within [`CONVERGENCE_TOLERANCE`] of the stationary estimate.
    pub converged: bool,
    /// Zero-based index of the most probable state (first one on ties).
    pub dominant_state: usize,
    /// Probability of the dominant state.
    pub dominant_probability: f64,
}

/// Classifies the final distribution of a trajectory against the stationary
/// estimate.
///
/// Returns `None` if the vectors differ in length or are empty.
pub fn classify_markov(
    last: &ProbabilityVector,
    stationary: &ProbabilityVector,
) -> Option<MarkovClassification> {
    let values = last.as_slice();
    if values.len() != stationary.len() {
        return None;
    }
    let dominant_state = argmax(values)?;
    let gap = max_abs_diff(values, stationary.as_slice());
    Some(MarkovClassification {
        converged: gap < CONVERGENCE_TOLERANCE,
        dominant_state,
        dominant_probability: values[dominant_state],
    })
}
