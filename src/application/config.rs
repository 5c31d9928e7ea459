//! Caller-supplied simulation parameters.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Kernel, RuleSet};
use crate::error::{Error, Result};

/// Parameters for building and seeding a [`Simulation`](super::Simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Rule string, e.g. "B3/S23"
    pub rule: String,
    /// Odd kernel side length (3 = Moore neighborhood)
    pub kernel_size: usize,
    /// Probability that a cell starts alive (0.0 to 1.0)
    pub seed_density: f64,
    /// Time between generations for a display loop; not used by the engine
    pub frame_interval_ms: u64,
    /// RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            rule: "B3/S23".to_string(),
            kernel_size: Kernel::MOORE_SIZE,
            seed_density: 0.15,
            frame_interval_ms: 50,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        info!(?config, "loaded simulation config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        validate_density(self.seed_density)?;
        self.kernel()?;
        self.rule_set()?;
        Ok(())
    }

    pub fn rule_set(&self) -> Result<RuleSet> {
        RuleSet::parse(&self.rule)
    }

    pub fn kernel(&self) -> Result<Kernel> {
        Kernel::new(self.kernel_size)
    }
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidConfig(format!(
            "grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

pub(crate) fn validate_density(density: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidConfig(format!(
            "seed density must be within [0, 1], got {}",
            density
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rule_set().unwrap(), RuleSet::conway());
        assert_eq!(config.kernel().unwrap(), Kernel::moore());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimulationConfig::from_json_str(r#"{"width": 64, "rule": "B368/S245"}"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 200);
        assert_eq!(config.kernel_size, 3);
        assert_eq!(config.rule, "B368/S245");
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig {
            seed: Some(9),
            ..SimulationConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            SimulationConfig { width: 0, ..Default::default() },
            SimulationConfig { seed_density: 1.5, ..Default::default() },
            SimulationConfig { seed_density: f64::NAN, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))), "{config:?}");
        }

        let even_kernel = SimulationConfig { kernel_size: 4, ..Default::default() };
        assert_eq!(even_kernel.validate(), Err(Error::InvalidKernelSize(4)));

        let huge_kernel = SimulationConfig { kernel_size: usize::MAX, ..Default::default() };
        assert_eq!(huge_kernel.validate(), Err(Error::InvalidKernelSize(usize::MAX)));

        let bad_rule = SimulationConfig { rule: "B3S23".into(), ..Default::default() };
        assert!(matches!(bad_rule.validate(), Err(Error::InvalidRuleFormat(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json_str("{ width: "),
            Err(Error::Serialization(_))
        ));
    }
}
