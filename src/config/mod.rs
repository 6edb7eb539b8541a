use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir};
use crate::currency::{ConversionRate, CurrencyCode};
use crate::errors::InsightsError;

const DEFAULT_CHART_FILE: &str = "budget_analysis.svg";

/// Report-generation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub currency: String,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_file: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            rate: 83.0,
            chart_file: None,
        }
    }
}

impl ReportConfig {
    pub fn conversion_rate(&self) -> ConversionRate {
        ConversionRate::new(CurrencyCode::new(self.currency.as_str()), self.rate)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.chart_file
            .clone()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILE))
    }
}

/// Loads and saves the report configuration under the app data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, InsightsError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, InsightsError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, InsightsError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load(&self) -> Result<ReportConfig, InsightsError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(ReportConfig::default())
        }
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), InsightsError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let temp = tempdir().expect("create temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create manager");
        let config = manager.load().expect("load defaults");
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.conversion_rate().rate, 83.0);
    }

    #[test]
    fn saved_config_round_trips() {
        let temp = tempdir().expect("create temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create manager");
        let config = ReportConfig {
            currency: "USD".into(),
            rate: 1.0,
            chart_file: Some("out/charts.svg".into()),
        };
        manager.save(&config).expect("save config");
        let loaded = manager.load().expect("load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.chart_path(), PathBuf::from("out/charts.svg"));
    }

    #[test]
    fn default_chart_path_is_relative_svg() {
        assert_eq!(
            ReportConfig::default().chart_path(),
            PathBuf::from("budget_analysis.svg")
        );
    }
}
