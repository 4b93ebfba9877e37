use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level scenario file.
///
/// Every section is optional; missing values fall back to the calculator
/// presets (see `convert`).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StochlabConfig {
    /// Markov chain scenario.
    #[serde(default)]
    pub markov: MarkovToml,

    /// M/M/1 parameters.
    #[serde(default)]
    pub mm1: QueueToml,

    /// M/M/k parameters.
    #[serde(default)]
    pub mmk: QueueToml,

    /// M/M/1/M/M parameters.
    #[serde(default)]
    pub mm1mm: QueueToml,

    /// M/M/k/M/M parameters.
    #[serde(default)]
    pub mmkmm: QueueToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MarkovToml {
    #[serde(default)]
    pub states: Option<usize>,
    #[serde(default)]
    pub steps: Option<usize>,
    #[serde(default)]
    pub matrix: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub initial: Option<Vec<f64>>,
    #[serde(default)]
    pub normalize: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct QueueToml {
    pub lambda: Option<f64>,
    pub mu: Option<f64>,
    pub servers: Option<usize>,
    pub population: Option<usize>,
}

/// Loads the scenario file, or the empty default when no path is given.
pub fn load(path: Option<&Path>) -> Result<StochlabConfig> {
    let Some(path) = path else {
        return Ok(StochlabConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_without_path_is_default() {
        let cfg = load(None).unwrap();
        assert!(cfg.markov.matrix.is_none());
        assert!(!cfg.markov.normalize);
        assert!(cfg.mmk.lambda.is_none());
    }

    #[test]
    fn load_full_scenario() {
        let file = write_config(
            r#"
[markov]
steps = 6
matrix = [[0.5, 0.5], [0.2, 0.8]]
initial = [1.0, 0.0]
normalize = true

[mmkmm]
lambda = 0.3
mu = 0.5
servers = 2
population = 12
"#,
        );
        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.markov.steps, Some(6));
        assert_eq!(
            cfg.markov.matrix,
            Some(vec![vec![0.5, 0.5], vec![0.2, 0.8]])
        );
        assert_eq!(cfg.markov.initial, Some(vec![1.0, 0.0]));
        assert!(cfg.markov.normalize);
        assert_eq!(cfg.mmkmm.servers, Some(2));
        assert_eq!(cfg.mmkmm.population, Some(12));
        assert!(cfg.mm1.lambda.is_none());
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let file = write_config("[mm1]\nrate = 0.5\n");
        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/stochlab.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
