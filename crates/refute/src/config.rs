//! Prover configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Iteration cap used when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Limits for the resolution loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProverConfig {
    /// Outer resolution rounds before giving up as inconclusive
    pub max_iterations: usize,
    /// Working set size limit (None means no limit)
    pub max_clauses: Option<usize>,
    /// Wall-clock limit, checked once per round (None means no limit)
    pub timeout: Option<Duration>,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_clauses: None,
            timeout: None,
        }
    }
}

impl ProverConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = Some(max_clauses);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProverConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_clauses, None);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ProverConfig = serde_json::from_str(r#"{ "max_clauses": 500 }"#).unwrap();
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.max_clauses, Some(500));
    }

    #[test]
    fn test_builders() {
        let config = ProverConfig::default()
            .with_max_iterations(3)
            .with_max_clauses(10)
            .with_timeout(Duration::from_millis(50));
        assert_eq!(config.max_iterations, 3);
        assert_eq!(config.max_clauses, Some(10));
        assert_eq!(config.timeout, Some(Duration::from_millis(50)));
    }
}
