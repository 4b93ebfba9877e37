//! Result types shared by every queueing model.

use serde::Serialize;

/// Performance measures of a queue in steady state.
///
/// Times are in the reciprocal unit of the rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueueMetrics {
    /// Offered load `ρ = λ/μ`.
    pub traffic_intensity: f64,
    /// Fraction of server capacity in use: `ρ` for one server, `ρ/k` for
    /// k servers, mean busy servers over k for a finite source.
    pub utilization: f64,
    /// Mean number in the system.
    pub l: f64,
    /// Mean number waiting.
    pub lq: f64,
    /// Mean time in the system.
    pub w: f64,
    /// Mean time waiting.
    pub wq: f64,
    /// Effective arrival rate (finite source only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_eff: Option<f64>,
    /// Probability that every source is in the system (finite source only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_block: Option<f64>,
}

/// Steady-state probabilities `P(n)` for `n = 0..=N`.
///
/// For infinite-population models the distribution is cut off at `N`, so
/// its mass falls short of 1 by [`tail_mass`](Self::tail_mass).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SteadyStateDistribution(Vec<f64>);

impl SteadyStateDistribution {
    pub(crate) fn new(probs: Vec<f64>) -> Self {
        Self(probs)
    }

    /// Returns `P(n)`, or `None` beyond the truncation point.
    pub fn p(&self, n: usize) -> Option<f64> {
        self.0.get(n).copied()
    }

    /// Returns `P(0)`.
    pub fn p0(&self) -> f64 {
        self.0[0]
    }

    /// Returns the highest `n` covered.
    pub fn truncation(&self) -> usize {
        self.0.len() - 1
    }

    /// Returns the number of probabilities held (`truncation() + 1`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a distribution covers at least `n = 0`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the probabilities as a slice.
    pub fn probs(&self) -> &[f64] {
        &self.0
    }

    /// Probability mass beyond the truncation point.
    pub fn tail_mass(&self) -> f64 {
        (1.0 - self.0.iter().sum::<f64>()).max(0.0)
    }
}

/// Metrics and distribution produced by one model evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueSolution {
    /// Steady-state performance measures.
    pub metrics: QueueMetrics,
    /// Steady-state probabilities of `n` customers in the system.
    pub distribution: SteadyStateDistribution,
}
