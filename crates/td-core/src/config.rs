//! Dashboard configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::controls::DEFAULT_SKIP_STEP;
use crate::error::ControlError;

/// Year slider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRangeConfig {
    /// Year shown first; not clamped into `[min, max]`
    pub start: i32,
    pub min: i32,
    pub max: i32,
    pub skip_step: u32,
}

impl Default for YearRangeConfig {
    fn default() -> Self {
        Self {
            start: 2025,
            min: 1930,
            max: 2025,
            skip_step: DEFAULT_SKIP_STEP,
        }
    }
}

/// Configuration for the dashboard and its three controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window and heading title
    pub title: String,

    /// Year slider range
    pub year: YearRangeConfig,

    /// Options cycled by the metric switcher
    pub metrics: Vec<String>,

    /// Options of the view toggle
    pub views: Vec<String>,

    /// View selected at start-up; out of range falls back to the first view
    pub initial_view: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Tour de Data".to_string(),
            year: YearRangeConfig::default(),
            metrics: vec![
                "Riders".to_string(),
                "Wins".to_string(),
                "Average age".to_string(),
            ],
            views: vec![
                "Nations".to_string(),
                "Teams".to_string(),
                "Riders".to_string(),
            ],
            initial_view: 0,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid dashboard configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Reject settings the controls would refuse at construction
    pub fn validate(&self) -> Result<(), ControlError> {
        if self.metrics.is_empty() || self.views.is_empty() {
            return Err(ControlError::EmptyOptions);
        }
        if self.year.min > self.year.max {
            return Err(ControlError::InvertedBounds {
                min: self.year.min,
                max: self.year.max,
            });
        }
        if self.year.skip_step == 0 {
            return Err(ControlError::InvalidSkipStep(0));
        }
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.year.skip_step, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "year": { "start": 2015, "min": 2010, "max": 2020 } }"#;
        let config = DashboardConfig::from_json_str(json).unwrap();
        assert_eq!(config.title, "Tour de Data");
        assert_eq!(config.year.start, 2015);
        assert_eq!(config.year.skip_step, 10);
        assert_eq!(config.views.len(), 3);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let json = r#"{ "year": { "min": 2020, "max": 2010 } }"#;
        let err = DashboardConfig::from_json_str(json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ControlError>(),
            Some(&ControlError::InvertedBounds { min: 2020, max: 2010 })
        );
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "metrics": [] }"#).unwrap_err();
        assert_eq!(err.downcast_ref::<ControlError>(), Some(&ControlError::EmptyOptions));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DashboardConfig {
            initial_view: 2,
            ..Default::default()
        };
        let parsed = DashboardConfig::from_json_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
