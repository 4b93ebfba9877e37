//! Error types for the stochlab-queue crate.

/// Error type for all fallible operations in the stochlab-queue crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueueError {
    /// Returned when a rate parameter is out of its domain.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidRate {
        /// Parameter name (`lambda` or `mu`).
        name: &'static str,
        /// The offending value.
        value: f64,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Returned when a server or population count is zero.
    #[error("invalid {name}: {value} (must be >= 1)")]
    InvalidCount {
        /// Parameter name (`servers` or `population`).
        name: &'static str,
        /// The offending value.
        value: usize,
    },

    /// Returned when the offered load per server is at least 1, so no
    /// steady state exists.
    #[error("unstable system: utilization {utilization} >= 1")]
    Unstable {
        /// `λ/μ` for one server, `λ/(kμ)` for k servers.
        utilization: f64,
    },
}

impl QueueError {
    /// Returns `true` for bad parameter values (as opposed to instability).
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidRate { .. } | Self::InvalidCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_rate() {
        let e = QueueError::InvalidRate {
            name: "mu",
            value: 0.0,
            reason: "must be finite and > 0",
        };
        assert_eq!(e.to_string(), "invalid mu: 0 (must be finite and > 0)");
    }

    #[test]
    fn error_invalid_count() {
        let e = QueueError::InvalidCount {
            name: "servers",
            value: 0,
        };
        assert_eq!(e.to_string(), "invalid servers: 0 (must be >= 1)");
    }

    #[test]
    fn error_unstable() {
        let e = QueueError::Unstable { utilization: 1.5 };
        assert_eq!(e.to_string(), "unstable system: utilization 1.5 >= 1");
    }

    #[test]
    fn error_families() {
        assert!(
            QueueError::InvalidCount {
                name: "population",
                value: 0
            }
            .is_validation_error()
        );
        assert!(!QueueError::Unstable { utilization: 1.0 }.is_validation_error());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<QueueError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<QueueError>();
    }
}
