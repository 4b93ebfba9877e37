//! Congestion labels for solved queues.

use std::fmt;

use serde::Serialize;
use stochlab_queue::QueueMetrics;

/// `P_block` at or above this is labelled [`CongestionLabel::HighBlocking`].
pub const BLOCKING_THRESHOLD: f64 = 0.2;
/// `Lq` above this is labelled [`CongestionLabel::Congested`].
pub const CONGESTION_THRESHOLD: f64 = 0.5;

/// Congestion regime of a queue in steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CongestionLabel {
    /// Many sources are shut out: `P_block >= 0.2`.
    HighBlocking,
    /// A sizeable queue forms: `Lq > 0.5`.
    Congested,
    /// Neither of the above.
    LowCongestion,
}

impl CongestionLabel {
    /// Returns the kebab-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighBlocking => "high-blocking",
            Self::Congested => "congested",
            Self::LowCongestion => "low-congestion",
        }
    }
}

impl fmt::Display for CongestionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels a queue by priority: blocking first, then queue length.
///
/// Infinite-population models never block, so a missing `P_block` counts
/// as 0 and only the `Lq` rule can fire.
pub fn classify_queue(metrics: &QueueMetrics) -> CongestionLabel {
    let p_block = metrics.p_block.unwrap_or(0.0);
    if p_block >= BLOCKING_THRESHOLD {
        CongestionLabel::HighBlocking
    } else if metrics.lq > CONGESTION_THRESHOLD {
        CongestionLabel::Congested
    } else {
        CongestionLabel::LowCongestion
    }
}
