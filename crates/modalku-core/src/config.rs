//! # Calculator Configuration
//!
//! The fixed business constants of the calculator, gathered in one value so
//! tests and hosts can inject their own.
//!
//! ## Defaults
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Constant                         Default   Used by                    │
//! │  ───────────────────────────────  ───────   ─────────────────────────  │
//! │  contingency_percentage           10 %      capex subtotal markup      │
//! │  buffer_cash_multiplier           3 ×       monthly operational costs  │
//! │  days_per_month                   30        daily → monthly revenue    │
//! │  recommendation.excellent_max     12 mo     "Sangat Baik"              │
//! │  recommendation.good_max          24 mo     "Baik"                     │
//! │  recommendation.moderate_max      36 mo     "Moderat"                  │
//! │  charts.cash_flow_horizon_months  36        ROI chart length           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading from files and environment lives in `modalku-config`; this
//! module only defines the shape, the defaults and the range checks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Markup applied to the capital expense subtotal, in percent.
pub const CONTINGENCY_PERCENTAGE: f64 = 10.0;

/// Months of operational cost held back as reserve.
pub const BUFFER_CASH_MULTIPLIER: f64 = 3.0;

/// Flat month length used to scale daily revenue.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Months in a year, for annualised rent and payback years.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default length of the projected cash flow series.
pub const DEFAULT_CASH_FLOW_HORIZON_MONTHS: u32 = 36;

// =============================================================================
// Recommendation Thresholds
// =============================================================================

/// Upper bounds (inclusive, in months) for each recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationThresholds {
    #[serde(default = "default_excellent_max")]
    pub excellent_max_months: f64,

    #[serde(default = "default_good_max")]
    pub good_max_months: f64,

    #[serde(default = "default_moderate_max")]
    pub moderate_max_months: f64,
}

fn default_excellent_max() -> f64 {
    12.0
}

fn default_good_max() -> f64 {
    24.0
}

fn default_moderate_max() -> f64 {
    36.0
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        RecommendationThresholds {
            excellent_max_months: default_excellent_max(),
            good_max_months: default_good_max(),
            moderate_max_months: default_moderate_max(),
        }
    }
}

// =============================================================================
// Chart Settings
// =============================================================================

/// Settings for the derived chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    /// Number of months in the cumulative cash flow projection.
    #[serde(default = "default_horizon")]
    pub cash_flow_horizon_months: u32,
}

fn default_horizon() -> u32 {
    DEFAULT_CASH_FLOW_HORIZON_MONTHS
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            cash_flow_horizon_months: default_horizon(),
        }
    }
}

// =============================================================================
// Calculator Config
// =============================================================================

/// Every constant the financial pipeline depends on.
///
/// ## Example
/// ```rust
/// use modalku_core::config::CalculatorConfig;
///
/// let config = CalculatorConfig {
///     contingency_percentage: 15.0,
///     ..CalculatorConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.buffer_cash_multiplier, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    #[serde(default = "default_contingency")]
    pub contingency_percentage: f64,

    #[serde(default = "default_buffer_multiplier")]
    pub buffer_cash_multiplier: f64,

    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,

    #[serde(default)]
    pub recommendation: RecommendationThresholds,

    #[serde(default)]
    pub charts: ChartSettings,
}

fn default_contingency() -> f64 {
    CONTINGENCY_PERCENTAGE
}

fn default_buffer_multiplier() -> f64 {
    BUFFER_CASH_MULTIPLIER
}

fn default_days_per_month() -> f64 {
    DAYS_PER_MONTH
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            contingency_percentage: default_contingency(),
            buffer_cash_multiplier: default_buffer_multiplier(),
            days_per_month: default_days_per_month(),
            recommendation: RecommendationThresholds::default(),
            charts: ChartSettings::default(),
        }
    }
}

impl CalculatorConfig {
    /// Checks every constant against its allowed range.
    pub fn validate(&self) -> CoreResult<()> {
        let finite_non_negative = [
            ("contingency_percentage", self.contingency_percentage),
            ("buffer_cash_multiplier", self.buffer_cash_multiplier),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.days_per_month.is_finite() || self.days_per_month <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "days_per_month must be greater than 0, got {}",
                self.days_per_month
            )));
        }

        let t = &self.recommendation;
        if !(t.excellent_max_months >= 0.0
            && t.excellent_max_months <= t.good_max_months
            && t.good_max_months <= t.moderate_max_months)
        {
            return Err(CoreError::InvalidConfig(format!(
                "recommendation thresholds must ascend, got {} / {} / {}",
                t.excellent_max_months, t.good_max_months, t.moderate_max_months
            )));
        }

        if self.charts.cash_flow_horizon_months == 0 {
            return Err(CoreError::InvalidConfig(
                "cash_flow_horizon_months must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
