// ============================================================================
// Line Checker Configuration
// Controls what the checker does with each valid line
// ============================================================================

use crate::numeric::{self, DecimalLiteral};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addend used by the arithmetic-enabled checker when none is given.
pub const DEFAULT_ADDEND: &str = "-123.456";

/// Configuration for a [`LineChecker`](crate::checker::LineChecker).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckerConfig {
    /// Optional: literal added to every valid line.
    /// None means lines are only validated.
    pub addend: Option<String>,

    /// Strip padding zeros from reported sums
    pub trim_results: bool,
}

impl CheckerConfig {
    /// Create a configuration that only validates lines
    pub fn new() -> Self {
        Self {
            addend: None,
            trim_results: false,
        }
    }

    /// Builder method: Add `addend` to every valid line
    pub fn with_addend(mut self, addend: impl Into<String>) -> Self {
        self.addend = Some(addend.into());
        self
    }

    /// Builder method: Trim padding zeros from sums
    pub fn with_trimmed_results(mut self, trim: bool) -> Self {
        self.trim_results = trim;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(addend) = &self.addend {
            if let Err(rejection) = numeric::scan(addend) {
                return Err(format!("Addend '{}' is not a decimal literal: {}", addend, rejection));
            }
        }

        Ok(())
    }

    /// The addend as a parsed literal, if one is configured and valid.
    pub(crate) fn parsed_addend(&self) -> Result<Option<DecimalLiteral>, String> {
        self.addend
            .as_deref()
            .map(|text| text.parse::<DecimalLiteral>().map_err(|e| e.to_string()))
            .transpose()
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CheckerConfig {
    /// Validation only: report whether each line is a decimal literal
    pub fn validate_only() -> Self {
        Self::new()
    }

    /// Validation plus summing each valid line with [`DEFAULT_ADDEND`]
    pub fn with_default_addend() -> Self {
        Self::new().with_addend(DEFAULT_ADDEND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CheckerConfig::new();
        assert_eq!(config.addend, None);
        assert!(!config.trim_results);
        assert!(config.validate().is_ok());
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CheckerConfig::new()
            .with_addend("0.5")
            .with_trimmed_results(true);

        assert_eq!(config.addend.as_deref(), Some("0.5"));
        assert!(config.trim_results);
        assert_eq!(
            config.parsed_addend().unwrap().map(|a| a.to_string()),
            Some("+0.5".to_string())
        );
    }

    #[test]
    fn test_validation() {
        let config = CheckerConfig::new().with_addend("12.");
        let err = config.validate().unwrap_err();
        assert!(err.contains("12."));
        assert!(config.parsed_addend().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CheckerConfig::validate_only().addend, None);

        let summing = CheckerConfig::with_default_addend();
        assert_eq!(summing.addend.as_deref(), Some(DEFAULT_ADDEND));
        assert!(summing.validate().is_ok());
    }
}
