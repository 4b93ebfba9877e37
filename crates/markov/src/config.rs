//! Caller-side configuration for a Markov chain calculation.

/// Smallest chain the calculator accepts.
pub const MIN_STATES: usize = 2;
/// Largest chain the calculator accepts.
pub const MAX_STATES: usize = 8;
/// Fewest propagation steps the calculator accepts.
pub const MIN_STEPS: usize = 1;
/// Most propagation steps the calculator accepts.
pub const MAX_STEPS: usize = 10;

const DEFAULT_STATES: usize = 3;
const DEFAULT_STEPS: usize = 3;

/// Chain size and step count for one calculation.
///
/// Both values are clamped into their accepted ranges on the way in, so a
/// `MarkovConfig` is always usable as-is. The engine functions themselves
/// never clamp.
///
/// # Example
///
/// ```
/// use stochlab_markov::MarkovConfig;
///
/// let config = MarkovConfig::new(12).with_steps(0);
/// assert_eq!(config.states(), 8);
/// assert_eq!(config.steps(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkovConfig {
    states: usize,
    steps: usize,
}

impl MarkovConfig {
    /// Creates a configuration for a chain with `states` states.
    ///
    /// `states` is clamped to `MIN_STATES..=MAX_STATES`; the step count
    /// defaults to 3.
    pub fn new(states: usize) -> Self {
        Self {
            states: states.clamp(MIN_STATES, MAX_STATES),
            steps: DEFAULT_STEPS,
        }
    }

    /// Sets the number of propagation steps, clamped to `MIN_STEPS..=MAX_STEPS`.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.clamp(MIN_STEPS, MAX_STEPS);
        self
    }

    /// Returns the number of states.
    pub fn states(&self) -> usize {
        self.states
    }

    /// Returns the number of propagation steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Default for MarkovConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATES)
    }
}
