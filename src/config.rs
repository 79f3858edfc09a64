//! Simulation configuration.
//!
//! The round-robin time slice is passed into the scheduler as a value
//! rather than compiled in. The CLI always runs with the defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SimError, SimResult};

/// Round-robin time quantum in ticks (at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(i64);

impl Quantum {
    /// Quantum used when none is configured.
    pub const DEFAULT: Quantum = Quantum(2);

    /// Creates a quantum, rejecting values below one tick.
    pub fn new(ticks: i64) -> SimResult<Self> {
        if ticks < 1 {
            return Err(SimError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    /// Ticks per dispatch.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Configuration shared by all scheduler constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time slice.
    pub quantum: Quantum,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.quantum = quantum;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quantum_is_two() {
        assert_eq!(SimulationConfig::new().quantum.ticks(), 2);
    }

    #[test]
    fn test_quantum_rejects_zero() {
        assert!(matches!(Quantum::new(0), Err(SimError::InvalidQuantum(0))));
        assert!(Quantum::new(1).is_ok());
    }

    #[test]
    fn test_deserialize_validates_quantum() {
        let cfg: SimulationConfig = serde_json::from_str(r#"{"quantum":4}"#).unwrap();
        assert_eq!(cfg.quantum.ticks(), 4);

        assert!(serde_json::from_str::<SimulationConfig>(r#"{"quantum":0}"#).is_err());
    }

    #[test]
    fn test_missing_quantum_uses_default() {
        let cfg: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SimulationConfig::default());
    }
}
