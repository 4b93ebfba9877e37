//! M/M/k: Poisson arrivals, k parallel exponential servers (Erlang C).

use stochlab_stats::erlang_terms;
use tracing::debug;

use crate::error::QueueError;
use crate::params::{check_arrival_rate, check_count, check_service_rate};
use crate::solution::{QueueMetrics, QueueSolution, SteadyStateDistribution};

/// States reported past `n = k` in the M/M/k distribution.
pub const MMK_EXTRA_STATES: usize = 8;

/// Solves the M/M/k queue with the Erlang C formulas.
///
/// With `ρ = λ/μ` and `ρs = ρ/k`:
///
/// ```text
/// p0 = 1 / ( Σ_{n<k} ρⁿ/n!  +  ρᵏ / (k!·(1−ρs)) )
/// Lq = p0·ρᵏ·ρs / (k!·(1−ρs)²)      L  = Lq + ρ
/// Wq = Lq/λ                          W  = Wq + 1/μ
/// ```
///
/// `P(n)` is reported for `n = 0..=k+8`. The `ρⁿ/n!` terms come from a
/// rescaled running product and only enter through their ratios
/// (`P(n) = t_n / Σ`), so large `ρ` and `k` stay finite. With `λ = 0` the
/// queue is empty and `Wq` is 0.
///
/// # Errors
///
/// - [`QueueError::InvalidRate`] / [`QueueError::InvalidCount`] for
///   parameters outside their domain.
/// - [`QueueError::Unstable`] if `ρ/k >= 1`.
#[tracing::instrument]
pub fn mmk(lambda: f64, mu: f64, servers: usize) -> Result<QueueSolution, QueueError> {
    check_arrival_rate(lambda)?;
    check_service_rate(mu)?;
    check_count("servers", servers)?;

    let k = servers;
    let rho = lambda / mu;
    let rho_s = rho / k as f64;
    if rho_s >= 1.0 {
        return Err(QueueError::Unstable { utilization: rho_s });
    }

    // terms[n] ∝ ρⁿ/n!
    let terms = erlang_terms(rho, k);
    let head: f64 = terms[..k].iter().sum();
    let total = head + terms[k] / (1.0 - rho_s);
    let p0 = terms[0] / total;
    let pk = terms[k] / total;

    let lq = pk * rho_s / ((1.0 - rho_s) * (1.0 - rho_s));
    let l = lq + rho;
    let wq = if lambda > 0.0 { lq / lambda } else { 0.0 };
    let w = wq + 1.0 / mu;
    debug!(rho_s, p0, lq, "M/M/k solved");

    let probs = (0..=k + MMK_EXTRA_STATES)
        .map(|n| {
            if n <= k {
                terms[n] / total
            } else {
                pk * rho_s.powi((n - k) as i32)
            }
        })
        .collect();

    Ok(QueueSolution {
        metrics: QueueMetrics {
            traffic_intensity: rho,
            utilization: rho_s,
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
