//! Simulator settings loaded from TOML.
//!
//! ```toml
//! quantum = 3
//! default_priority = 1
//! tie_breaker = "by_id"
//! ```
//!
//! Every key is optional; missing keys take the [`Simulator::new`] defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatching::TieBreaker;
use crate::error::SchedError;
use crate::scheduler::{Simulator, DEFAULT_QUANTUM};

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Round-robin quantum (0 falls back to the default).
    #[serde(default = "default_quantum")]
    pub quantum: u32,

    /// Priority assumed for processes without one.
    #[serde(default)]
    pub default_priority: i32,

    /// Tie-break for SJF and the priority disciplines.
    #[serde(default)]
    pub tie_breaker: TieBreaker,
}

fn default_quantum() -> u32 {
    DEFAULT_QUANTUM
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quantum: default_quantum(),
            default_priority: 0,
            tie_breaker: TieBreaker::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SchedError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchedError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds the simulator these settings describe.
    pub fn build_simulator(&self) -> Simulator {
        Simulator::new()
            .with_quantum(self.quantum)
            .with_default_priority(self.default_priority)
            .with_tie_breaker(self.tie_breaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.build_simulator(), Simulator::new());
    }

    #[test]
    fn test_full_document() {
        let config = SimulatorConfig::from_toml_str(
            r#"
            quantum = 3
            default_priority = -2
            tie_breaker = "input_order"
            "#,
        )
        .unwrap();

        let sim = config.build_simulator();
        assert_eq!(sim.quantum(), 3);
        assert_eq!(sim.default_priority(), -2);
        assert_eq!(sim.tie_breaker(), TieBreaker::InputOrder);
    }

    #[test]
    fn test_zero_quantum_falls_back() {
        let config = SimulatorConfig::from_toml_str("quantum = 0").unwrap();
        assert_eq!(config.build_simulator().quantum(), DEFAULT_QUANTUM);
    }

    #[test]
    fn test_bad_tie_breaker() {
        let err = SimulatorConfig::from_toml_str(r#"tie_breaker = "random""#).unwrap_err();
        assert!(matches!(err, SchedError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulatorConfig::load("/nonexistent/u-cpusched/config.toml").unwrap_err();
        assert!(matches!(err, SchedError::Io(_)));
    }
}
