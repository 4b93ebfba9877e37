//! Queue commands: solve one of the four birth-death models.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stochlab_classify::classify_queue;
use stochlab_queue::QueueError;

use crate::cli::QueueArgs;
use crate::config;
use crate::convert::{self, QueueKind, QueueOverrides};
use crate::output::{self, QueueReport};

/// Run a queue calculator. `servers` and `population` come from the
/// subcommands that accept them.
pub fn run(
    kind: QueueKind,
    args: QueueArgs,
    servers: Option<usize>,
    population: Option<usize>,
) -> Result<()> {
    let _cmd = info_span!("queue", kind = kind.name()).entered();

    let config = config::load(args.config.as_deref())?;
    let overrides = QueueOverrides {
        lambda: args.lambda,
        mu: args.mu,
        servers,
        population,
    };
    let params = convert::build_queue_parameters(kind, kind.section(&config), &overrides)?;
    info!(
        model = ?params.model(),
        lambda = params.lambda(),
        mu = params.mu(),
        servers = params.servers(),
        population = ?params.population(),
        "solving queue"
    );

    let solution = match params.solve() {
        Ok(solution) => solution,
        Err(e @ QueueError::Unstable { .. }) => {
            return Err(e).context("no steady state: reduce lambda, raise mu or add servers");
        }
        Err(e) => return Err(e).context("invalid queue parameters"),
    };

    let label = classify_queue(&solution.metrics);
    info!(
        lq = solution.metrics.lq,
        p_block = ?solution.metrics.p_block,
        %label,
        "queue classified"
    );

    let report = QueueReport::new(&params, &solution, label);
    output::emit(&report, args.output.as_deref())
}
