//! # Payback Recommendation
//!
//! Classifies a payback period into one of four qualitative tiers.
//!
//! ## Tiers (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  payback months     Tier         Label          Severity               │
//! │  ────────────────   ──────────   ────────────   ───────────            │
//! │  ≤ 12               Excellent    Sangat Baik    success                │
//! │  ≤ 24               Good         Baik           success                │
//! │  ≤ 36               Moderate     Moderat        warning                │
//! │  otherwise / ∞ / NaN Poor        Kurang Baik    destructive            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::RecommendationThresholds;

/// Visual severity of a recommendation (maps to the UI colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Destructive,
}

/// Qualitative payback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl RecommendationTier {
    /// Picks the tier for a payback period.
    ///
    /// Comparisons against NaN are false, so NaN lands in `Poor` together
    /// with infinity.
    pub fn for_payback(payback_months: f64, thresholds: &RecommendationThresholds) -> Self {
        if payback_months <= thresholds.excellent_max_months {
            RecommendationTier::Excellent
        } else if payback_months <= thresholds.good_max_months {
            RecommendationTier::Good
        } else if payback_months <= thresholds.moderate_max_months {
            RecommendationTier::Moderate
        } else {
            RecommendationTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationTier::Excellent => "Sangat Baik",
            RecommendationTier::Good => "Baik",
            RecommendationTier::Moderate => "Moderat",
            RecommendationTier::Poor => "Kurang Baik",
        }
    }

    /// Explains the tier in terms of the thresholds it was picked with.
    ///
    /// With the default thresholds this reads "kurang dari 12 bulan",
    /// "antara 12-24 bulan" and so on.
    pub fn description(&self, thresholds: &RecommendationThresholds) -> String {
        let excellent = thresholds.excellent_max_months;
        let good = thresholds.good_max_months;
        let moderate = thresholds.moderate_max_months;

        match self {
            RecommendationTier::Excellent => format!(
                "Bisnis ini memiliki prospek balik modal yang sangat baik, dengan perkiraan balik modal kurang dari {} bulan.",
                excellent
            ),
            RecommendationTier::Good => format!(
                "Bisnis ini memiliki prospek balik modal yang baik, dengan perkiraan balik modal antara {}-{} bulan.",
                excellent, good
            ),
            RecommendationTier::Moderate => format!(
                "Bisnis ini memiliki prospek balik modal yang moderat, dengan perkiraan balik modal antara {}-{} bulan. Pertimbangkan untuk meninjau kembali rencana bisnis Anda.",
                good, moderate
            ),
            RecommendationTier::Poor => format!(
                "Bisnis ini memiliki prospek balik modal yang kurang baik, dengan perkiraan balik modal lebih dari {} bulan. Sebaiknya pertimbangkan kembali rencana bisnis Anda atau cari cara untuk meningkatkan pendapatan dan mengurangi biaya.",
                moderate
            ),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RecommendationTier::Excellent | RecommendationTier::Good => Severity::Success,
            RecommendationTier::Moderate => Severity::Warning,
            RecommendationTier::Poor => Severity::Destructive,
        }
    }
}

/// The recommendation record shown under the payback figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub label: String,
    pub description: String,
    pub severity: Severity,
}

impl Recommendation {
    /// Builds the record for `tier`, describing it with `thresholds`.
    pub fn new(tier: RecommendationTier, thresholds: &RecommendationThresholds) -> Self {
        Recommendation {
            tier,
            label: tier.label().to_string(),
            description: tier.description(thresholds),
            severity: tier.severity(),
        }
    }
}

/// Builds the recommendation for a payback period.
///
/// ## Example
/// ```rust
/// use modalku_core::config::RecommendationThresholds;
/// use modalku_core::recommendation::{recommend, RecommendationTier};
///
/// let rec = recommend(f64::INFINITY, &RecommendationThresholds::default());
/// assert_eq!(rec.tier, RecommendationTier::Poor);
/// assert_eq!(rec.label, "Kurang Baik");
/// ```
pub fn recommend(payback_months: f64, thresholds: &RecommendationThresholds) -> Recommendation {
    Recommendation::new(RecommendationTier::for_payback(payback_months, thresholds), thresholds)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(months: f64) -> RecommendationTier {
        RecommendationTier::for_payback(months, &RecommendationThresholds::default())
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier(12.0), RecommendationTier::Excellent);
        assert_eq!(tier(12.0001), RecommendationTier::Good);
        assert_eq!(tier(24.0), RecommendationTier::Good);
        assert_eq!(tier(36.0), RecommendationTier::Moderate);
        assert_eq!(tier(36.0001), RecommendationTier::Poor);
    }

    #[test]
    fn test_non_finite_payback_is_poor() {
        assert_eq!(tier(f64::INFINITY), RecommendationTier::Poor);
        assert_eq!(tier(f64::NAN), RecommendationTier::Poor);
    }

    #[test]
    fn test_recommendation_record() {
        let rec = recommend(1.82, &RecommendationThresholds::default());
        assert_eq!(rec.label, "Sangat Baik");
        assert_eq!(rec.severity, Severity::Success);

        let rec = recommend(30.0, &RecommendationThresholds::default());
        assert_eq!(rec.label, "Moderat");
        assert_eq!(rec.severity, Severity::Warning);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = RecommendationThresholds {
            excellent_max_months: 6.0,
            good_max_months: 12.0,
            moderate_max_months: 18.0,
        };
        assert_eq!(
            RecommendationTier::for_payback(10.0, &strict),
            RecommendationTier::Good
        );
    }

    #[test]
    fn test_default_descriptions() {
        let defaults = RecommendationThresholds::default();
        assert!(RecommendationTier::Excellent
            .description(&defaults)
            .contains("kurang dari 12 bulan"));
        assert!(RecommendationTier::Good
            .description(&defaults)
            .contains("antara 12-24 bulan"));
        assert!(RecommendationTier::Moderate
            .description(&defaults)
            .contains("antara 24-36 bulan"));
        assert!(RecommendationTier::Poor
            .description(&defaults)
            .contains("lebih dari 36 bulan"));
    }

    #[test]
    fn test_descriptions_follow_custom_thresholds() {
        let strict = RecommendationThresholds {
            excellent_max_months: 6.0,
            good_max_months: 12.0,
            moderate_max_months: 18.5,
        };
        let rec = recommend(10.0, &strict);
        assert_eq!(rec.label, "Baik");
        assert!(rec.description.contains("antara 6-12 bulan"));

        let rec = recommend(40.0, &strict);
        assert!(rec.description.contains("lebih dari 18.5 bulan"));
        assert!(!rec.description.contains("36"));
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
    }
}
