//! Markov command: validate a chain, propagate it and estimate its limit.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use stochlab_classify::classify_markov;
use stochlab_markov::{
    MarkovError, iterate, normalize_matrix, stationary, validate_matrix, validate_vector,
};

use crate::cli::MarkovArgs;
use crate::config;
use crate::convert;
use crate::output::{self, MarkovReport};

/// Run the Markov chain pipeline.
pub fn run(args: MarkovArgs) -> Result<()> {
    let _cmd = info_span!("markov").entered();

    // 1. Load scenario
    let config = config::load(args.config.as_deref())?;
    let scenario = convert::build_markov_scenario(&config.markov, &args);
    let n = scenario.config.states();
    let steps = scenario.config.steps();
    info!(states = n, steps, "markov scenario loaded");

    // 2. Validate inputs; row repair only when the user asked for it
    let (matrix, normalized) = match validate_matrix(&scenario.matrix, n) {
        Ok(matrix) => (matrix, false),
        Err(MarkovError::RowSum { row, sum }) if scenario.normalize => {
            warn!(row, sum, "matrix rows do not sum to 1, normalizing");
            let matrix =
                normalize_matrix(&scenario.matrix, n).context("invalid transition matrix")?;
            (matrix, true)
        }
        Err(e @ MarkovError::RowSum { .. }) => {
            return Err(e).context("invalid transition matrix: fix the rows or pass --normalize");
        }
        Err(e) => return Err(e).context("invalid transition matrix"),
    };
    let initial = validate_vector(&scenario.initial, n).context("invalid initial vector")?;

    // 3. Propagate and estimate the stationary distribution
    let trajectory = iterate(&matrix, &initial, steps).context("failed to propagate chain")?;
    let estimate = stationary(&matrix);
    let residual = estimate.residual(&matrix);

    // 4. Classify
    let classification = classify_markov(trajectory.last(), estimate.distribution())
        .context("trajectory and stationary estimate differ in length")?;
    info!(
        converged = classification.converged,
        dominant_state = classification.dominant_state,
        residual,
        "markov chain classified"
    );

    let report = MarkovReport {
        states: n,
        steps,
        normalized,
        matrix: &matrix,
        trajectory: &trajectory,
        stationary: estimate.distribution(),
        stationary_iterations: estimate.iterations(),
        stationary_residual: residual,
        classification,
    };
    output::emit(&report, args.output.as_deref())
}
