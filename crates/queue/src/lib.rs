//! # stochlab-queue
//!
//! Steady-state solutions of birth-death queueing models.
//!
//! | Model | Function | Distribution reported |
//! |-------|----------|-----------------------|
//! | M/M/1 | [`mm1`] | `P(0..=12)` |
//! | M/M/k (Erlang C) | [`mmk`] | `P(0..=k+8)` |
//! | M/M/k/M/M (finite source) | [`finite_source`] | `P(0..=M)` |
//!
//! Every model returns a [`QueueSolution`]: the [`QueueMetrics`]
//! (`ρ`, utilization, `L`, `Lq`, `W`, `Wq`, and for the finite source
//! `λ_eff` and `P_block`) plus the [`SteadyStateDistribution`].
//!
//! ## Glossary
//!
//! | Symbol | Field | Meaning |
//! |--------|-------|---------|
//! | ρ | [`QueueMetrics::traffic_intensity`] | offered load `λ/μ` |
//! | L | [`QueueMetrics::l`] | mean number in the system |
//! | Lq | [`QueueMetrics::lq`] | mean number waiting |
//! | W | [`QueueMetrics::w`] | mean time in the system |
//! | Wq | [`QueueMetrics::wq`] | mean time waiting |
//! | λ_eff | [`QueueMetrics::lambda_eff`] | arrival rate actually admitted |
//! | P_block | [`QueueMetrics::p_block`] | all sources in the system |
//!
//! ```rust
//! use stochlab_queue::{QueueParameters, mm1};
//!
//! let s = mm1(0.6, 1.0).unwrap();
//! assert!((s.metrics.l - 1.5).abs() < 1e-9);
//!
//! let finite = QueueParameters::new(0.2, 0.5)
//!     .with_servers(3)
//!     .with_population(10)
//!     .solve()
//!     .unwrap();
//! assert_eq!(finite.distribution.truncation(), 10);
//! ```

mod error;
mod finite;
mod mm1;
mod mmk;
mod params;
mod solution;

pub use error::QueueError;
pub use finite::finite_source;
pub use mm1::{MM1_TRUNCATION, mm1};
pub use mmk::{MMK_EXTRA_STATES, mmk};
pub use params::{QueueModel, QueueParameters};
pub use solution::{QueueMetrics, QueueSolution, SteadyStateDistribution};
