//! M/M/1: Poisson arrivals, one exponential server.

use tracing::debug;

use crate::error::QueueError;
use crate::params::{check_arrival_rate, check_service_rate};
use crate::solution::{QueueMetrics, QueueSolution, SteadyStateDistribution};

/// Highest `n` reported in the M/M/1 distribution.
pub const MM1_TRUNCATION: usize = 12;

/// Solves the M/M/1 queue in closed form.
///
/// With `ρ = λ/μ`: `L = ρ/(1−ρ)`, `Lq = ρ²/(1−ρ)`, `W = 1/(μ−λ)`,
/// `Wq = ρ/(μ−λ)` and `P(n) = (1−ρ)ρⁿ` for `n = 0..=12`.
///
/// # Errors
///
/// - [`QueueError::InvalidRate`] if λ is negative or non-finite, or μ is not
///   finite and positive.
/// - [`QueueError::Unstable`] if `λ >= μ`.
#[tracing::instrument]
pub fn mm1(lambda: f64, mu: f64) -> Result<QueueSolution, QueueError> {
    check_arrival_rate(lambda)?;
    check_service_rate(mu)?;
    let rho = lambda / mu;
    if lambda >= mu {
        return Err(QueueError::Unstable { utilization: rho });
    }

    let l = rho / (1.0 - rho);
    let lq = rho * rho / (1.0 - rho);
    let w = 1.0 / (mu - lambda);
    let wq = rho / (mu - lambda);
    debug!(rho, l, lq, "M/M/1 solved");

    let probs = (0..=MM1_TRUNCATION)
        .map(|n| (1.0 - rho) * rho.powi(n as i32))
        .collect();

    Ok(QueueSolution {
        metrics: QueueMetrics {
            traffic_intensity: rho,
            utilization: rho,
            l,
            lq,
            w,
            wq,
            lambda_eff: None,
            p_block: None,
        },
        distribution: SteadyStateDistribution::new(probs),
    })
}
