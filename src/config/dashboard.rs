//! Dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dashboard::DEFAULT_TREND_WINDOW;

const MIN_TREND_WINDOW: usize = 1;
const MAX_TREND_WINDOW: usize = 50;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of completed assessments in the trend series
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl DashboardConfig {
    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_TREND_WINDOW..=MAX_TREND_WINDOW).contains(&self.trend_window) {
            return Err(ValidationError::TrendWindowOutOfRange {
                value: self.trend_window,
                min: MIN_TREND_WINDOW,
                max: MAX_TREND_WINDOW,
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trend_window: default_trend_window(),
        }
    }
}

fn default_trend_window() -> usize {
    DEFAULT_TREND_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.trend_window, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trend_window_bounds() {
        for (window, ok) in [(0, false), (1, true), (50, true), (51, false)] {
            let config = DashboardConfig { trend_window: window };
            assert_eq!(config.validate().is_ok(), ok, "window {}", window);
        }
    }
}
