use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stochlab Markov chain and queueing calculator.
#[derive(Parser)]
#[command(
    name = "stochlab",
    version,
    about = "Markov chain and birth-death queueing calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Propagate a discrete-time Markov chain and estimate its stationary distribution.
    Markov(MarkovArgs),
    /// Single-server queue (M/M/1).
    Mm1(Mm1Args),
    /// Multi-server queue (M/M/k, Erlang C).
    Mmk(MmkArgs),
    /// Single-server queue with a finite calling population (M/M/1/M/M).
    Mm1mm(Mm1mmArgs),
    /// Multi-server queue with a finite calling population (M/M/k/M/M).
    Mmkmm(MmkmmArgs),
}

/// Arguments for the `markov` subcommand.
#[derive(clap::Args)]
pub struct MarkovArgs {
    /// Path to TOML scenario file (built-in example chain if omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of states (clamped to 2..=8).
    #[arg(short = 'n', long)]
    pub states: Option<usize>,

    /// Override the number of steps (clamped to 1..=10).
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Normalize matrix rows that do not sum to 1 instead of failing.
    #[arg(long)]
    pub normalize: bool,
}

/// Arguments shared by every queue subcommand.
#[derive(clap::Args)]
pub struct QueueArgs {
    /// Path to TOML scenario file (calculator presets if omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Arrival rate λ (per source for finite populations).
    #[arg(short, long)]
    pub lambda: Option<f64>,

    /// Service rate μ per server.
    #[arg(short = 'u', long)]
    pub mu: Option<f64>,
}

/// Arguments for the `mm1` subcommand.
#[derive(clap::Args)]
pub struct Mm1Args {
    #[command(flatten)]
    pub queue: QueueArgs,
}

/// Arguments for the `mmk` subcommand.
#[derive(clap::Args)]
pub struct MmkArgs {
    #[command(flatten)]
    pub queue: QueueArgs,

    /// Number of servers k.
    #[arg(short = 'k', long)]
    pub servers: Option<usize>,
}

/// Arguments for the `mm1mm` subcommand.
#[derive(clap::Args)]
pub struct Mm1mmArgs {
    #[command(flatten)]
    pub queue: QueueArgs,

    /// Size of the calling population M.
    #[arg(short = 'm', long)]
    pub population: Option<usize>,
}

/// Arguments for the `mmkmm` subcommand.
#[derive(clap::Args)]
pub struct MmkmmArgs {
    #[command(flatten)]
    pub queue: QueueArgs,

    /// Number of servers k.
    #[arg(short = 'k', long)]
    pub servers: Option<usize>,

    /// Size of the calling population M.
    #[arg(short = 'm', long)]
    pub population: Option<usize>,
}
