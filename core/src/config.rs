//! Resolved dashboard configuration
//!
//! Core only accepts fully resolved, validated configuration.
//! Discovery, loading and merging happen in the CLI layer.

use crate::error::ConfigError;
use crate::router::{Page, DEFAULT_HISTORY_LIMIT};

pub const MIN_CHART_WIDTH: usize = 10;
pub const MIN_CHART_HEIGHT: usize = 3;

/// Display settings for one dashboard session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Page selected when the dashboard opens
    pub start_page: Page,
    /// Columns available to a chart's plot area
    pub chart_width: usize,
    /// Rows available to a line chart's plot area
    pub chart_height: usize,
    /// Emit ANSI colours in plain-text output
    pub color: bool,
    /// Navigation history entries kept for "back"
    pub max_history: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Home,
            chart_width: 40,
            chart_height: 8,
            color: true,
            max_history: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart_width < MIN_CHART_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "chart_width".into(),
                value: self.chart_width.to_string(),
            });
        }
        if self.chart_height < MIN_CHART_HEIGHT {
            return Err(ConfigError::InvalidValue {
                field: "chart_height".into(),
                value: self.chart_height.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_page, Page::Home);
    }

    #[test]
    fn test_small_chart_rejected() {
        let config = DashboardConfig {
            chart_width: 4,
            ..DashboardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "chart_width".into(),
                value: "4".into()
            })
        );

        let config = DashboardConfig {
            chart_height: 1,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
