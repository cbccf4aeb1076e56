//! # Calculator Settings
//!
//! Loads the calculator's business constants for a host application.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MODALKU_CONTINGENCY_PERCENTAGE=15                                  │
//! │     MODALKU_BUFFER_CASH_MULTIPLIER=6                                   │
//! │     MODALKU_DAYS_PER_MONTH=26                                          │
//! │     MODALKU_{EXCELLENT,GOOD,MODERATE}_MAX_MONTHS=6 / 12 / 18           │
//! │     MODALKU_CASH_FLOW_HORIZON_MONTHS=60                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, $MODALKU_CONFIG, or                                 │
//! │     ~/.config/modalku/modalku.toml (Linux)                             │
//! │     ~/Library/Application Support/id.modalku.modalku/modalku.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10 % contingency, 3 × buffer, 30-day month, 12/24/36, 36 months    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # modalku.toml
//! [costs]
//! contingency_percentage = 10.0
//! buffer_cash_multiplier = 3.0
//!
//! [revenue]
//! days_per_month = 30.0
//!
//! [recommendation]
//! excellent_max_months = 12.0
//! good_max_months = 24.0
//! moderate_max_months = 36.0
//!
//! [charts]
//! cash_flow_horizon_months = 36
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use modalku_core::config::{ChartSettings, RecommendationThresholds};
use modalku_core::CalculatorConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MODALKU_CONFIG";

const CONFIG_FILE_NAME: &str = "modalku.toml";

// =============================================================================
// File Sections
// =============================================================================

/// `[costs]`: startup cost markups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSettings {
    #[serde(default = "default_contingency")]
    pub contingency_percentage: f64,

    #[serde(default = "default_buffer_multiplier")]
    pub buffer_cash_multiplier: f64,
}

fn default_contingency() -> f64 {
    modalku_core::config::CONTINGENCY_PERCENTAGE
}

fn default_buffer_multiplier() -> f64 {
    modalku_core::config::BUFFER_CASH_MULTIPLIER
}

impl Default for CostSettings {
    fn default() -> Self {
        CostSettings {
            contingency_percentage: default_contingency(),
            buffer_cash_multiplier: default_buffer_multiplier(),
        }
    }
}

/// `[revenue]`: revenue model assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSettings {
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,
}

fn default_days_per_month() -> f64 {
    modalku_core::config::DAYS_PER_MONTH
}

impl Default for RevenueSettings {
    fn default() -> Self {
        RevenueSettings {
            days_per_month: default_days_per_month(),
        }
    }
}

/// `[recommendation]`: payback tier thresholds in months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_excellent")]
    pub excellent_max_months: f64,

    #[serde(default = "default_good")]
    pub good_max_months: f64,

    #[serde(default = "default_moderate")]
    pub moderate_max_months: f64,
}

fn default_excellent() -> f64 {
    RecommendationThresholds::default().excellent_max_months
}

fn default_good() -> f64 {
    RecommendationThresholds::default().good_max_months
}

fn default_moderate() -> f64 {
    RecommendationThresholds::default().moderate_max_months
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        RecommendationSettings {
            excellent_max_months: default_excellent(),
            good_max_months: default_good(),
            moderate_max_months: default_moderate(),
        }
    }
}

/// `[charts]`: chart series settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFileSettings {
    #[serde(default = "default_horizon")]
    pub cash_flow_horizon_months: u32,
}

fn default_horizon() -> u32 {
    modalku_core::config::DEFAULT_CASH_FLOW_HORIZON_MONTHS
}

impl Default for ChartFileSettings {
    fn default() -> Self {
        ChartFileSettings {
            cash_flow_horizon_months: default_horizon(),
        }
    }
}

// =============================================================================
// Settings File
// =============================================================================

/// The on-disk shape of `modalku.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub costs: CostSettings,

    #[serde(default)]
    pub revenue: RevenueSettings,

    #[serde(default)]
    pub recommendation: RecommendationSettings,

    #[serde(default)]
    pub charts: ChartFileSettings,
}

impl From<&SettingsFile> for CalculatorConfig {
    fn from(file: &SettingsFile) -> Self {
        CalculatorConfig {
            contingency_percentage: file.costs.contingency_percentage,
            buffer_cash_multiplier: file.costs.buffer_cash_multiplier,
            days_per_month: file.revenue.days_per_month,
            recommendation: RecommendationThresholds {
                excellent_max_months: file.recommendation.excellent_max_months,
                good_max_months: file.recommendation.good_max_months,
                moderate_max_months: file.recommendation.moderate_max_months,
            },
            charts: ChartSettings {
                cash_flow_horizon_months: file.charts.cash_flow_horizon_months,
            },
        }
    }
}

impl From<&CalculatorConfig> for SettingsFile {
    fn from(config: &CalculatorConfig) -> Self {
        SettingsFile {
            costs: CostSettings {
                contingency_percentage: config.contingency_percentage,
                buffer_cash_multiplier: config.buffer_cash_multiplier,
            },
            revenue: RevenueSettings {
                days_per_month: config.days_per_month,
            },
            recommendation: RecommendationSettings {
                excellent_max_months: config.recommendation.excellent_max_months,
                good_max_months: config.recommendation.good_max_months,
                moderate_max_months: config.recommendation.moderate_max_months,
            },
            charts: ChartFileSettings {
                cash_flow_horizon_months: config.charts.cash_flow_horizon_months,
            },
        }
    }
}

impl SettingsFile {
    /// Parses settings from TOML text. Missing sections and keys take
    /// their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the settings as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Converts to the engine's config and checks its ranges.
    pub fn to_calculator_config(&self) -> ConfigResult<CalculatorConfig> {
        let config = CalculatorConfig::from(self);
        config.validate()?;
        Ok(config)
    }

    /// Applies `MODALKU_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides_from(process_env)
    }

    /// Applies overrides looked up through `lookup` (the environment in
    /// production, a map in tests).
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_CONTINGENCY_PERCENTAGE")? {
            debug!(contingency_percentage = v, "Overriding contingency from environment");
            self.costs.contingency_percentage = v;
        }

        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_BUFFER_CASH_MULTIPLIER")? {
            debug!(buffer_cash_multiplier = v, "Overriding buffer multiplier from environment");
            self.costs.buffer_cash_multiplier = v;
        }

        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_DAYS_PER_MONTH")? {
            debug!(days_per_month = v, "Overriding month length from environment");
            self.revenue.days_per_month = v;
        }

        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_EXCELLENT_MAX_MONTHS")? {
            debug!(excellent_max_months = v, "Overriding excellent threshold from environment");
            self.recommendation.excellent_max_months = v;
        }

        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_GOOD_MAX_MONTHS")? {
            debug!(good_max_months = v, "Overriding good threshold from environment");
            self.recommendation.good_max_months = v;
        }

        if let Some(v) = parse_override::<f64, _>(&lookup, "MODALKU_MODERATE_MAX_MONTHS")? {
            debug!(moderate_max_months = v, "Overriding moderate threshold from environment");
            self.recommendation.moderate_max_months = v;
        }

        if let Some(v) = parse_override::<u32, _>(&lookup, "MODALKU_CASH_FLOW_HORIZON_MONTHS")? {
            debug!(cash_flow_horizon_months = v, "Overriding cash flow horizon from environment");
            self.charts.cash_flow_horizon_months = v;
        }

        Ok(())
    }
}

fn parse_override<T, F>(lookup: &F, var: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var: var.to_string(),
                value: raw,
            }),
    }
}

// =============================================================================
// Loading & Saving
// =============================================================================

/// Loads the calculator config from file, environment, and defaults.
///
/// ## Load Order (later overrides earlier)
/// 1. Default values
/// 2. Config file (`config_path`, else `$MODALKU_CONFIG`, else the platform
///    config directory); a missing file is not an error
/// 3. Environment variables
pub fn load(config_path: Option<PathBuf>) -> ConfigResult<CalculatorConfig> {
    load_from(config_path, process_env)
}

/// Same as [`load`], reading `MODALKU_*` variables through `lookup`.
pub fn load_from<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<CalculatorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = SettingsFile::default();

    let path = config_path
        .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
        .or_else(default_config_path);

    if let Some(path) = path {
        if path.exists() {
            info!(?path, "Loading calculator config from file");
            let contents = std::fs::read_to_string(&path)?;
            settings = SettingsFile::from_toml_str(&contents)?;
        } else {
            debug!(?path, "Config file not found, using defaults");
        }
    }

    settings.apply_overrides_from(&lookup)?;

    settings.to_calculator_config()
}

/// Loads config or returns the defaults if loading fails.
pub fn load_or_default(config_path: Option<PathBuf>) -> CalculatorConfig {
    load_or_default_from(config_path, process_env)
}

/// Same as [`load_or_default`], reading `MODALKU_*` variables through
/// `lookup`.
pub fn load_or_default_from<F>(config_path: Option<PathBuf>, lookup: F) -> CalculatorConfig
where
    F: Fn(&str) -> Option<String>,
{
    load_from(config_path, lookup).unwrap_or_else(|e| {
        warn!("Failed to load calculator config: {}. Using defaults.", e);
        CalculatorConfig::default()
    })
}

/// Saves `config` as TOML, creating parent directories as needed.
pub fn save(config: &CalculatorConfig, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
    config.validate()?;

    let path = config_path
        .or_else(default_config_path)
        .ok_or(ConfigError::NoConfigPath)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = SettingsFile::from(config).to_toml_string()?;
    std::fs::write(&path, contents)?;

    info!(?path, "Calculator config saved");
    Ok(path)
}

/// Reads and parses a specific file without environment overrides.
pub fn read_file(path: &Path) -> ConfigResult<CalculatorConfig> {
    let contents = std::fs::read_to_string(path)?;
    SettingsFile::from_toml_str(&contents)?.to_calculator_config()
}

fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Returns the platform config file path.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("id", "modalku", "modalku")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings_match_engine_defaults() {
        let config = SettingsFile::default().to_calculator_config().unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let settings = SettingsFile::from_toml_str(
            r#"
            [costs]
            contingency_percentage = 15.0

            [charts]
            cash_flow_horizon_months = 60
            "#,
        )
        .unwrap();
        let config = settings.to_calculator_config().unwrap();
        assert_eq!(config.contingency_percentage, 15.0);
        assert_eq!(config.buffer_cash_multiplier, 3.0);
        assert_eq!(config.days_per_month, 30.0);
        assert_eq!(config.charts.cash_flow_horizon_months, 60);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let settings = SettingsFile::from_toml_str(
            r#"
            [recommendation]
            excellent_max_months = 30.0
            good_max_months = 24.0
            "#,
        )
        .unwrap();
        assert!(matches!(
            settings.to_calculator_config(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = SettingsFile::from_toml_str("[costs\ncontingency_percentage = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut settings = SettingsFile::default();
        settings
            .apply_overrides_from(lookup_in(&[
                ("MODALKU_CONTINGENCY_PERCENTAGE", "12.5"),
                ("MODALKU_DAYS_PER_MONTH", " 26 "),
                ("MODALKU_CASH_FLOW_HORIZON_MONTHS", "48"),
            ]))
            .unwrap();
        assert_eq!(settings.costs.contingency_percentage, 12.5);
        assert_eq!(settings.costs.buffer_cash_multiplier, 3.0);
        assert_eq!(settings.revenue.days_per_month, 26.0);
        assert_eq!(settings.charts.cash_flow_horizon_months, 48);
    }

    #[test]
    fn test_threshold_overrides() {
        let mut settings = SettingsFile::default();
        settings
            .apply_overrides_from(lookup_in(&[
                ("MODALKU_EXCELLENT_MAX_MONTHS", "6"),
                ("MODALKU_GOOD_MAX_MONTHS", "12"),
                ("MODALKU_MODERATE_MAX_MONTHS", "18.5"),
            ]))
            .unwrap();
        let config = settings.to_calculator_config().unwrap();
        assert_eq!(config.recommendation.excellent_max_months, 6.0);
        assert_eq!(config.recommendation.good_max_months, 12.0);
        assert_eq!(config.recommendation.moderate_max_months, 18.5);
    }

    #[test]
    fn test_unparseable_override() {
        let mut settings = SettingsFile::default();
        let err = settings
            .apply_overrides_from(lookup_in(&[("MODALKU_BUFFER_CASH_MULTIPLIER", "tiga")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = SettingsFile::default().to_toml_string().unwrap();
        assert!(toml_str.contains("[costs]"));
        assert!(toml_str.contains("[recommendation]"));
        assert!(toml_str.contains("cash_flow_horizon_months = 36"));
    }

    #[test]
    fn test_save_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = CalculatorConfig {
            buffer_cash_multiplier: 6.0,
            ..CalculatorConfig::default()
        };
        let written = save(&config, Some(path.clone())).unwrap();
        assert_eq!(written, path);

        assert_eq!(read_file(&path).unwrap(), config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalculatorConfig {
            days_per_month: 0.0,
            ..CalculatorConfig::default()
        };
        assert!(save(&config, Some(dir.path().join(CONFIG_FILE_NAME))).is_err());
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = load_from(Some(path), lookup_in(&[])).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_load_layers_env_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
            [costs]
            contingency_percentage = 15.0
            buffer_cash_multiplier = 4.0

            [charts]
            cash_flow_horizon_months = 48
            "#,
        )
        .unwrap();

        let config = load_from(
            Some(path),
            lookup_in(&[
                ("MODALKU_CONTINGENCY_PERCENTAGE", "20"),
                ("MODALKU_GOOD_MAX_MONTHS", "30"),
            ]),
        )
        .unwrap();

        // env beats file
        assert_eq!(config.contingency_percentage, 20.0);
        assert_eq!(config.recommendation.good_max_months, 30.0);
        // file beats defaults
        assert_eq!(config.buffer_cash_multiplier, 4.0);
        assert_eq!(config.charts.cash_flow_horizon_months, 48);
        // untouched keys keep defaults
        assert_eq!(config.days_per_month, 30.0);
    }

    #[test]
    fn test_load_finds_file_through_config_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[revenue]\ndays_per_month = 26.0\n").unwrap();

        let path_str = path.to_string_lossy().into_owned();
        let config = load_from(None, lookup_in(&[(CONFIG_PATH_ENV, path_str.as_str())])).unwrap();
        assert_eq!(config.days_per_month, 26.0);
    }

    #[test]
    fn test_load_rejects_invalid_layers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "[costs\ncontingency_percentage = 1").unwrap();
        assert!(matches!(
            load_from(Some(path.clone()), lookup_in(&[])),
            Err(ConfigError::Parse(_))
        ));

        std::fs::write(&path, "[revenue]\ndays_per_month = 30.0\n").unwrap();
        assert!(matches!(
            load_from(Some(path.clone()), lookup_in(&[("MODALKU_DAYS_PER_MONTH", "0")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[costs]\ncontingency_percentage = \"sepuluh\"\n").unwrap();

        let config = load_or_default_from(Some(path.clone()), lookup_in(&[]));
        assert_eq!(config, CalculatorConfig::default());

        std::fs::write(&path, "[costs]\ncontingency_percentage = 12.0\n").unwrap();
        let config = load_or_default_from(
            Some(path),
            lookup_in(&[("MODALKU_BUFFER_CASH_MULTIPLIER", "tiga")]),
        );
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
