//! M/M/k/M/M: k exponential servers fed by a finite population of M sources.

use stochlab_stats::{mean_excess, mean_index};
use tracing::debug;

use crate::error::QueueError;
use crate::params::{check_arrival_rate, check_count, check_service_rate};
use crate::solution::{QueueMetrics, QueueSolution, SteadyStateDistribution};

/// Ratios above this are rescaled so very large populations do not overflow.
const RESCALE_ABOVE: f64 = 1e250;

/// Solves the finite-source queue with the birth-death recursion.
///
/// With `n` customers present, the birth rate is `(M−n)·λ` (only idle
/// sources arrive) and the death rate is `min(n, k)·μ`. Starting from
/// `ratio[0] = 1`:
///
/// ```text
/// ratio[n] = ratio[n−1] · (M−(n−1))·λ / (min(n,k)·μ)
/// P(n)     = ratio[n] / Σ ratio
/// ```
///
/// `L = Σ n·P(n)`, `Lq = Σ max(0, n−k)·P(n)`,
/// `λ_eff = Σ_{n<M} (M−n)·λ·P(n)`, `W = L/λ_eff`, `Wq = Lq/λ_eff` and
/// `P_block = P(M)`. When `λ = 0` no one ever arrives, `λ_eff` is 0 and both
/// times are reported as `+∞`.
///
/// `servers = 1` is the single-server finite-source model (M/M/1/M/M).
///
/// # Errors
///
/// Returns [`QueueError::InvalidRate`] or [`QueueError::InvalidCount`] for
/// parameters outside their domain. A finite source is always stable.
#[tracing::instrument]
pub fn finite_source(
    population: usize,
    servers: usize,
    lambda: f64,
    mu: f64,
) -> Result<QueueSolution, QueueError> {
    check_count("population", population)?;
    check_count("servers", servers)?;
    check_arrival_rate(lambda)?;
    check_service_rate(mu)?;

    let m = population;
    let k = servers;

    let mut ratios = Vec::with_capacity(m + 1);
    ratios.push(1.0);
    for n in 1..=m {
        let birth = (m - (n - 1)) as f64 * lambda;
        let death = n.min(k) as f64 * mu;
        let next = ratios[n - 1] * (birth / death);
        ratios.push(next);
        if next > RESCALE_ABOVE {
            for r in ratios.iter_mut() {
                *r /= next;
            }
        }
    }

    let total: f64 = ratios.iter().sum();
    let p0 = 1.0 / total;
    let probs: Vec<f64> = ratios.iter().map(|r| p0 * r).collect();

    let l = mean_index(&probs);
    let lq = mean_excess(&probs, k);
    let lambda_eff: f64 = probs[..m]
        .iter()
        .enumerate()
        .map(|(n, &p)| (m - n) as f64 * lambda * p)
        .sum();
    let (w, wq) = if lambda_eff > 0.0 {
        (l / lambda_eff, lq / lambda_eff)
    } else {
        (f64::INFINITY, f64::INFINITY)
    };
    let p_block = probs[m];
    debug!(p0 = probs[0], l, lq, lambda_eff, p_block, "finite source solved");

    Ok(QueueSolution {
        metrics: QueueMetrics {
            traffic_intensity: lambda / mu,
            utilization: (l - lq) / k as f64,
            l,
            lq,
            w,
            wq,
            lambda_eff: Some(lambda_eff),
            p_block: Some(p_block),
        },
        distribution: SteadyStateDistribution::new(probs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn finite_source_single_source_single_server() {
        let s = finite_source(1, 1, 0.5, 1.0).unwrap();
        let m = s.metrics;
        assert_abs_diff_eq!(s.distribution.p0(), 2.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.distribution.p(1).unwrap(), 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.l, 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.lambda_eff.unwrap(), 1.0 / 3.0, epsilon = 1e-6);
        assert_eq!(m.lq, 0.0);
        assert_abs_diff_eq!(m.w, 1.0, epsilon = 1e-6);
        assert_eq!(m.wq, 0.0);
        assert_abs_diff_eq!(m.p_block.unwrap(), 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn finite_source_distribution_sums_to_one() {
        let s = finite_source(10, 3, 0.2, 0.5).unwrap();
        assert_eq!(s.distribution.truncation(), 10);
        let total: f64 = s.distribution.probs().iter().sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
        assert!(s.distribution.tail_mass() < 1e-12);
    }

    #[test]
    fn finite_source_two_sources_hand_computed() {
        // M=2, k=1, λ=μ=1: ratios 1, 2, 2 -> P = 0.2, 0.4, 0.4.
        let s = finite_source(2, 1, 1.0, 1.0).unwrap();
        let p = s.distribution.probs();
        assert_abs_diff_eq!(p[0], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 0.4, epsilon = 1e-12);
        let m = s.metrics;
        assert_abs_diff_eq!(m.l, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(m.lq, 0.4, epsilon = 1e-12);
        // λ_eff = 2·0.2 + 1·0.4 = 0.8, equal to the throughput μ·(1 − P0).
        assert_abs_diff_eq!(m.lambda_eff.unwrap(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(m.w, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.wq, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.utilization, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn finite_source_no_queue_when_servers_cover_population() {
        let s = finite_source(4, 4, 0.7, 0.3).unwrap();
        assert_eq!(s.metrics.lq, 0.0);
        assert_eq!(s.metrics.wq, 0.0);
    }

    #[test]
    fn finite_source_zero_arrivals() {
        let s = finite_source(5, 2, 0.0, 1.0).unwrap();
        assert_eq!(s.distribution.p0(), 1.0);
        assert_eq!(s.metrics.lambda_eff, Some(0.0));
        assert_eq!(s.metrics.w, f64::INFINITY);
        assert_eq!(s.metrics.wq, f64::INFINITY);
        assert_eq!(s.metrics.p_block, Some(0.0));
    }

    #[test]
    fn finite_source_large_population_does_not_overflow() {
        let s = finite_source(2000, 2, 5.0, 1.0).unwrap();
        let total: f64 = s.distribution.probs().iter().sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
        assert!(s.metrics.l.is_finite());
        assert!(s.metrics.w.is_finite());
    }

    #[test]
    fn finite_source_rejects_bad_params() {
        assert!(matches!(
            finite_source(0, 1, 0.5, 1.0),
            Err(QueueError::InvalidCount {
                name: "population",
                ..
            })
        ));
        assert!(matches!(
            finite_source(3, 0, 0.5, 1.0),
            Err(QueueError::InvalidCount { name: "servers", .. })
        ));
        assert!(matches!(
            finite_source(3, 1, -0.5, 1.0),
            Err(QueueError::InvalidRate { name: "lambda", .. })
        ));
        assert!(matches!(
            finite_source(3, 1, 0.5, 0.0),
            Err(QueueError::InvalidRate { name: "mu", .. })
        ));
    }
}
