//! Pure conversion functions: TOML config + CLI overrides -> engine inputs.

use anyhow::{Result, bail};

use stochlab_markov::{MarkovConfig, ProbabilityVector, TransitionMatrix};
use stochlab_queue::QueueParameters;

use crate::cli::MarkovArgs;
use crate::config::{MarkovToml, QueueToml, StochlabConfig};

/// Chain used when the scenario file does not provide one.
const EXAMPLE_MATRIX: [[f64; 3]; 3] = [[0.7, 0.2, 0.1], [0.3, 0.4, 0.3], [0.2, 0.3, 0.5]];
const EXAMPLE_INITIAL: [f64; 3] = [1.0, 0.0, 0.0];
const EXAMPLE_STEPS: usize = 4;

/// Raw Markov inputs, not yet validated.
#[derive(Debug)]
pub struct MarkovScenario {
    pub config: MarkovConfig,
    pub matrix: Vec<Vec<f64>>,
    pub initial: Vec<f64>,
    /// The user agreed to have off rows normalized.
    pub normalize: bool,
}

/// Builds the Markov scenario; CLI flags win over the TOML section.
///
/// - With a `matrix` in the file, the state count defaults to its row count
///   and the initial vector to uniform.
/// - Without one but with a state count, the 0.6-diagonal starting grid is
///   used with a uniform initial vector.
/// - With neither, the built-in three-state example runs for four steps from
///   state 1.
pub fn build_markov_scenario(toml: &MarkovToml, args: &MarkovArgs) -> MarkovScenario {
    let states = args.states.or(toml.states);
    let steps = args.steps.or(toml.steps);

    let (config, matrix, default_initial) = match (&toml.matrix, states) {
        (Some(matrix), _) => {
            let config = MarkovConfig::new(states.unwrap_or(matrix.len()));
            let initial = ProbabilityVector::uniform(config.states()).into_vec();
            (config, matrix.clone(), initial)
        }
        (None, Some(n)) => {
            let config = MarkovConfig::new(n);
            let matrix = TransitionMatrix::default_for(config.states()).to_rows();
            let initial = ProbabilityVector::uniform(config.states()).into_vec();
            (config, matrix, initial)
        }
        (None, None) => {
            let config = MarkovConfig::new(EXAMPLE_MATRIX.len()).with_steps(EXAMPLE_STEPS);
            let matrix = EXAMPLE_MATRIX.iter().map(|row| row.to_vec()).collect();
            (config, matrix, EXAMPLE_INITIAL.to_vec())
        }
    };

    MarkovScenario {
        config: steps.map_or(config, |s| config.with_steps(s)),
        matrix,
        initial: toml.initial.clone().unwrap_or(default_initial),
        normalize: args.normalize || toml.normalize,
    }
}

/// The four queue calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    Mm1,
    Mmk,
    Mm1mm,
    Mmkmm,
}

impl QueueKind {
    /// Subcommand and TOML section name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mm1 => "mm1",
            Self::Mmk => "mmk",
            Self::Mm1mm => "mm1mm",
            Self::Mmkmm => "mmkmm",
        }
    }

    /// Returns this calculator's section of the scenario file.
    pub fn section(self, config: &StochlabConfig) -> &QueueToml {
        match self {
            Self::Mm1 => &config.mm1,
            Self::Mmk => &config.mmk,
            Self::Mm1mm => &config.mm1mm,
            Self::Mmkmm => &config.mmkmm,
        }
    }

    /// Values the calculator starts from (and resets to).
    fn preset(self) -> QueueParameters {
        match self {
            Self::Mm1 => QueueParameters::new(0.6, 1.0),
            Self::Mmk => QueueParameters::new(2.0, 1.0).with_servers(3),
            Self::Mm1mm => QueueParameters::new(0.2, 1.0).with_population(10),
            Self::Mmkmm => QueueParameters::new(0.2, 0.5)
                .with_servers(3)
                .with_population(10),
        }
    }

    fn takes_servers(self) -> bool {
        matches!(self, Self::Mmk | Self::Mmkmm)
    }

    fn takes_population(self) -> bool {
        matches!(self, Self::Mm1mm | Self::Mmkmm)
    }
}

/// Queue values given on the command line.
#[derive(Debug, Default)]
pub struct QueueOverrides {
    pub lambda: Option<f64>,
    pub mu: Option<f64>,
    pub servers: Option<usize>,
    pub population: Option<usize>,
}

/// Builds [`QueueParameters`] for one calculator.
///
/// Precedence: CLI flag, then TOML value, then the calculator preset.
pub fn build_queue_parameters(
    kind: QueueKind,
    toml: &QueueToml,
    overrides: &QueueOverrides,
) -> Result<QueueParameters> {
    if !kind.takes_servers() && toml.servers.is_some() {
        bail!("[{}] does not take `servers`", kind.name());
    }
    if !kind.takes_population() && toml.population.is_some() {
        bail!("[{}] does not take `population`", kind.name());
    }

    let preset = kind.preset();
    let lambda = overrides.lambda.or(toml.lambda).unwrap_or(preset.lambda());
    let mu = overrides.mu.or(toml.mu).unwrap_or(preset.mu());
    let mut params = QueueParameters::new(lambda, mu);
    if kind.takes_servers() {
        params = params.with_servers(overrides.servers.or(toml.servers).unwrap_or(preset.servers()));
    }
    if let Some(m) = overrides
        .population
        .or(toml.population)
        .or(preset.population())
    {
        params = params.with_population(m);
    }
    Ok(params)
}
