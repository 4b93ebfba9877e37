//! Threshold-based interpretation of engine results.
//!
//! Both classifiers are plain functions over computed numbers. The
//! thresholds are fixed constants; changing them changes every label the
//! calculator has ever produced for the same input.

mod markov;
mod queue;

pub use markov::{CONVERGENCE_TOLERANCE, MarkovClassification, classify_markov};
pub use queue::{BLOCKING_THRESHOLD, CONGESTION_THRESHOLD, CongestionLabel, classify_queue};
