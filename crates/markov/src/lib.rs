//! Discrete-time Markov chain engine.
//!
//! Validates raw transition matrices and initial distributions, propagates a
//! distribution step by step, and approximates the stationary distribution by
//! a fixed number of power iterations.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  validate     │────▶│  propagate     │────▶│   stationary     │
//!  │  (P, S0)      │     │  (S0..Sn)      │     │  (300 × π·P)     │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! A row that does not sum to 1 stops validation with
//! [`MarkovError::RowSum`]. Repair it with [`normalize_row`] (or the whole
//! matrix with [`normalize_matrix`]) only when the user asked for it.
//!
//! # Quick start
//!
//! ```rust
//! use stochlab_markov::{MarkovConfig, iterate, stationary, validate_matrix, validate_vector};
//!
//! let config = MarkovConfig::new(3).with_steps(4);
//! let p = validate_matrix(
//!     &[[0.7, 0.2, 0.1], [0.3, 0.4, 0.3], [0.2, 0.3, 0.5]],
//!     config.states(),
//! )
//! .unwrap();
//! let s0 = validate_vector(&[1.0, 0.0, 0.0], config.states()).unwrap();
//!
//! let trajectory = iterate(&p, &s0, config.steps()).unwrap();
//! let pi = stationary(&p);
//!
//! assert_eq!(trajectory.states().len(), 5);
//! assert!(pi.residual(&p) < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod propagate;
pub mod stationary;
pub mod validate;

pub use config::{MAX_STATES, MAX_STEPS, MIN_STATES, MIN_STEPS, MarkovConfig};
pub use error::MarkovError;
pub use matrix::{ProbabilityVector, TransitionMatrix};
pub use propagate::{MarkovTrajectory, iterate, step};
pub use stationary::{STATIONARY_ITERATIONS, StationaryEstimate, stationary};
pub use validate::{
    ROW_SUM_TOLERANCE, normalize_matrix, normalize_row, validate_matrix, validate_vector,
};
