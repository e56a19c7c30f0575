//! Calculator registry.
//!
//! Validation is the admission gate: a configuration that fails any
//! structural check is refused outright, never registered in a degraded
//! form. After registration a calculator's config is trusted everywhere.

use tracing::info;

use bedside_core::{CalculatorConfig, ConfigError};

use crate::calculators::all_calculators;

#[derive(Default)]
pub struct Registry {
    entries: Vec<CalculatorConfig>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry pre-loaded with every builtin calculator.
    pub fn with_builtins() -> Result<Registry, ConfigError> {
        let mut registry = Registry::new();
        for config in all_calculators() {
            registry.register(config)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, config: CalculatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if self.entries.iter().any(|c| c.id == config.id) {
            return Err(ConfigError::DuplicateCalculator { id: config.id });
        }
        info!(calculator = %config.id, "calculator registered");
        self.entries.push(config);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CalculatorConfig> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Registered calculators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CalculatorConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedside_core::config::ScoringRules;

    #[test]
    fn the_same_id_cannot_register_twice() {
        let fresh = || {
            CalculatorConfig::new(
                "dup",
                "Dup",
                "test fixture",
                ScoringRules::Formula { compute: |_| vec![] },
            )
        };
        let mut registry = Registry::new();
        registry.register(fresh()).unwrap();
        assert_eq!(
            registry.register(fresh()),
            Err(ConfigError::DuplicateCalculator {
                id: "dup".to_string()
            })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn an_invalid_config_is_refused_not_degraded() {
        let mut config = CalculatorConfig::new(
            "bad",
            "Bad",
            "test fixture",
            ScoringRules::YesNoSum { questions: vec![] },
        );
        config.risk_levels.clear();

        let mut registry = Registry::new();
        assert!(registry.register(config).is_err());
        assert!(registry.is_empty());
    }
}
