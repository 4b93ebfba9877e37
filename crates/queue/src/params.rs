//! Queue parameters and the model they select.

use serde::Serialize;

use crate::error::QueueError;
use crate::finite::finite_source;
use crate::mm1::mm1;
use crate::mmk::mmk;
use crate::solution::QueueSolution;

/// Which birth-death model a parameter set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueueModel {
    /// Single server, infinite population.
    #[serde(rename = "M/M/1")]
    Mm1,
    /// k servers, infinite population (Erlang C).
    #[serde(rename = "M/M/k")]
    Mmk,
    /// k servers, finite calling population.
    #[serde(rename = "M/M/k/M/M")]
    FiniteSource,
}

/// Rates and sizes for one queueing calculation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use stochlab_queue::{QueueModel, QueueParameters};
///
/// let params = QueueParameters::new(0.2, 0.5)
///     .with_servers(3)
///     .with_population(10);
///
/// assert!(params.validate().is_ok());
/// assert_eq!(params.model(), QueueModel::FiniteSource);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueParameters {
    /// Arrival rate λ (per source when the population is finite).
    lambda: f64,
    /// Service rate μ per server.
    mu: f64,
    /// Number of servers k.
    servers: usize,
    /// Calling population M, `None` for an infinite population.
    population: Option<usize>,
    /// Model chosen by the builder calls.
    model: QueueModel,
}

impl QueueParameters {
    /// Creates a single-server, infinite-population parameter set.
    pub fn new(lambda: f64, mu: f64) -> Self {
        Self {
            lambda,
            mu,
            servers: 1,
            population: None,
            model: QueueModel::Mm1,
        }
    }

    /// Sets the number of servers.
    ///
    /// An infinite-population set becomes M/M/k, even for a single server.
    pub fn with_servers(mut self, servers: usize) -> Self {
        self.servers = servers;
        if self.model == QueueModel::Mm1 {
            self.model = QueueModel::Mmk;
        }
        self
    }

    /// Sets a finite calling population.
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = Some(population);
        self.model = QueueModel::FiniteSource;
        self
    }

    // --- Accessors ---

    /// Returns the arrival rate λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the service rate μ.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the number of servers.
    pub fn servers(&self) -> usize {
        self.servers
    }

    /// Returns the calling population, if finite.
    pub fn population(&self) -> Option<usize> {
        self.population
    }

    /// Returns the model these parameters select.
    pub fn model(&self) -> QueueModel {
        self.model
    }

    /// Validates the parameter domain.
    ///
    /// Checks that λ is finite and non-negative, μ is finite and positive,
    /// and the server count and population (if any) are at least 1.
    /// Stability is a property of the model and is checked when solving.
    pub fn validate(&self) -> Result<(), QueueError> {
        check_arrival_rate(self.lambda)?;
        check_service_rate(self.mu)?;
        check_count("servers", self.servers)?;
        if let Some(m) = self.population {
            check_count("population", m)?;
        }
        Ok(())
    }

    /// Solves the model selected by [`model`](Self::model).
    pub fn solve(&self) -> Result<QueueSolution, QueueError> {
        match self.model {
            QueueModel::Mm1 => mm1(self.lambda, self.mu),
            QueueModel::Mmk => mmk(self.lambda, self.mu, self.servers),
            QueueModel::FiniteSource => finite_source(
                self.population.unwrap_or_default(),
                self.servers,
                self.lambda,
                self.mu,
            ),
        }
    }
}

pub(crate) fn check_arrival_rate(lambda: f64) -> Result<(), QueueError> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(QueueError::InvalidRate {
            name: "lambda",
            value: lambda,
            reason: "must be finite and >= 0",
        });
    }
    Ok(())
}

pub(crate) fn check_service_rate(mu: f64) -> Result<(), QueueError> {
    if !mu.is_finite() || mu <= 0.0 {
        return Err(QueueError::InvalidRate {
            name: "mu",
            value: mu,
            reason: "must be finite and > 0",
        });
    }
    Ok(())
}

pub(crate) fn check_count(name: &'static str, value: usize) -> Result<(), QueueError> {
    if value == 0 {
        return Err(QueueError::InvalidCount { name, value });
    }
    Ok(())
}
