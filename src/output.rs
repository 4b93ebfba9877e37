//! JSON reports written by the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use stochlab_classify::{CongestionLabel, MarkovClassification};
use stochlab_markov::{MarkovTrajectory, ProbabilityVector, TransitionMatrix};
use stochlab_queue::{
    QueueMetrics, QueueModel, QueueParameters, QueueSolution, SteadyStateDistribution,
};

/// Result of the `markov` subcommand.
#[derive(Debug, Serialize)]
pub struct MarkovReport<'a> {
    pub states: usize,
    pub steps: usize,
    /// Rows were rescaled before propagation.
    pub normalized: bool,
    pub matrix: &'a TransitionMatrix,
    /// Distributions for t = 0..=steps.
    pub trajectory: &'a MarkovTrajectory,
    pub stationary: &'a ProbabilityVector,
    pub stationary_iterations: usize,
    pub stationary_residual: f64,
    pub classification: MarkovClassification,
}

/// Result of a queue subcommand.
#[derive(Debug, Serialize)]
pub struct QueueReport<'a> {
    pub model: QueueModel,
    pub parameters: ParameterSummary,
    pub metrics: &'a QueueMetrics,
    pub distribution: &'a SteadyStateDistribution,
    /// Probability mass beyond the reported states.
    pub tail_mass: f64,
    pub label: CongestionLabel,
}

#[derive(Debug, Serialize)]
pub struct ParameterSummary {
    pub lambda: f64,
    pub mu: f64,
    pub servers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<usize>,
}

impl<'a> QueueReport<'a> {
    pub fn new(
        params: &QueueParameters,
        solution: &'a QueueSolution,
        label: CongestionLabel,
    ) -> Self {
        Self {
            model: params.model(),
            parameters: ParameterSummary {
                lambda: params.lambda(),
                mu: params.mu(),
                servers: params.servers(),
                population: params.population(),
            },
            metrics: &solution.metrics,
            distribution: &solution.distribution,
            tail_mass: solution.distribution.tail_mass(),
            label,
        }
    }
}

/// Writes `report` as pretty JSON to `path`, or to stdout when no path is given.
pub fn emit<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(path) => {
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stochlab_classify::{classify_markov, classify_queue};
    use stochlab_markov::{iterate, stationary, validate_matrix, validate_vector};

    fn read_json(path: &Path) -> serde_json::Value {
        let text = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn markov_report_layout() {
        let rows = [[0.7, 0.2, 0.1], [0.3, 0.4, 0.3], [0.2, 0.3, 0.5]];
        let matrix = validate_matrix(&rows, 3).unwrap();
        let initial = validate_vector(&[1.0, 0.0, 0.0], 3).unwrap();
        let trajectory = iterate(&matrix, &initial, 4).unwrap();
        let estimate = stationary(&matrix);
        let report = MarkovReport {
            states: 3,
            steps: 4,
            normalized: false,
            matrix: &matrix,
            trajectory: &trajectory,
            stationary: estimate.distribution(),
            stationary_iterations: estimate.iterations(),
            stationary_residual: estimate.residual(&matrix),
            classification: classify_markov(trajectory.last(), estimate.distribution()).unwrap(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markov.json");
        emit(&report, Some(&path)).unwrap();
        let json = read_json(&path);

        assert_eq!(json["matrix"].as_array().unwrap().len(), 3);
        assert_eq!(json["trajectory"].as_array().unwrap().len(), 5);
        assert_eq!(json["stationary_iterations"], 300);
        assert_eq!(json["classification"]["converged"], false);
        assert_eq!(json["classification"]["dominant_state"], 0);
        let pi0 = json["stationary"][0].as_f64().unwrap();
        assert_relative_eq!(pi0, 21.0 / 46.0, epsilon = 1e-9);
    }

    #[test]
    fn queue_report_layout() {
        let params = QueueParameters::new(2.0, 1.0).with_servers(3);
        let solution = params.solve().unwrap();
        let report = QueueReport::new(&params, &solution, classify_queue(&solution.metrics));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mmk.json");
        emit(&report, Some(&path)).unwrap();
        let json = read_json(&path);

        assert_eq!(json["model"], "M/M/k");
        assert_eq!(json["label"], "congested");
        assert_eq!(json["parameters"]["servers"], 3);
        assert!(json["parameters"].get("population").is_none());
        assert!(json["metrics"].get("p_block").is_none());
        assert_relative_eq!(json["metrics"]["lq"].as_f64().unwrap(), 8.0 / 9.0, epsilon = 1e-9);
        assert_eq!(json["distribution"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn emit_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.json");
        let err = emit(&serde_json::json!({"a": 1}), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to write output"));
    }
}
