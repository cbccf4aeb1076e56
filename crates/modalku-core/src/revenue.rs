//! # Revenue Model Evaluation
//!
//! Turns the active revenue model's daily assumptions into monthly figures.
//!
//! ## Pipeline
//! ```text
//! rate × daily_count ──► daily_revenue
//!                             │  × 30 (flat month)
//!                             ▼
//!                       monthly_revenue ──┬──► × mdr% / 100  ──► transaction fee
//!                                         └──► × cogs% / 100 ──► raw materials
//! ```
//!
//! The 30-day month is a deliberate simplification and is kept as is; hosts
//! can override it through [`CalculatorConfig::days_per_month`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::CalculatorConfig;
use crate::types::RevenueModel;

/// Derived revenue figures for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub monthly_transaction_fee: f64,
    pub monthly_raw_materials_cost: f64,
}

impl RevenueBreakdown {
    /// All-zero figures, used when no revenue model is set.
    pub const ZERO: RevenueBreakdown = RevenueBreakdown {
        daily_revenue: 0.0,
        monthly_revenue: 0.0,
        monthly_transaction_fee: 0.0,
        monthly_raw_materials_cost: 0.0,
    };
}

impl RevenueModel {
    /// Computes the monthly figures with the given month length.
    ///
    /// A zero rate or zero daily count yields all zeros.
    pub fn breakdown(&self, config: &CalculatorConfig) -> RevenueBreakdown {
        let rate = self.rate();
        let daily_count = self.daily_count();
        if rate == 0.0 || daily_count == 0.0 {
            return RevenueBreakdown::ZERO;
        }

        let daily_revenue = rate * daily_count;
        let monthly_revenue = daily_revenue * config.days_per_month;

        RevenueBreakdown {
            daily_revenue,
            monthly_revenue,
            monthly_transaction_fee: monthly_revenue * self.mdr_percentage() / 100.0,
            monthly_raw_materials_cost: monthly_revenue * self.cogs_percentage() / 100.0,
        }
    }

    /// Writes a breakdown back into the payload's derived fields.
    fn apply(&mut self, figures: &RevenueBreakdown) {
        match self {
            RevenueModel::Ticket(t) => {
                t.daily_revenue = Some(figures.daily_revenue);
                t.monthly_revenue = Some(figures.monthly_revenue);
                t.total_transaction_fee = Some(figures.monthly_transaction_fee);
                t.total_raw_materials = Some(figures.monthly_raw_materials_cost);
            }
            RevenueModel::Quantity(q) => {
                q.daily_revenue = Some(figures.daily_revenue);
                q.monthly_revenue = Some(figures.monthly_revenue);
                q.total_transaction_fee = Some(figures.monthly_transaction_fee);
                q.total_raw_materials = Some(figures.monthly_raw_materials_cost);
            }
        }
    }
}

/// Returns a copy of `model` with its derived fields populated, using the
/// default 30-day month.
///
/// ## Example
/// ```rust
/// use modalku_core::revenue::evaluate_revenue;
/// use modalku_core::types::{RevenueModel, TicketBasedRevenue};
///
/// let model = RevenueModel::Ticket(TicketBasedRevenue {
///     average_ticket_size: 100_000.0,
///     daily_tickets: 20.0,
///     mdr_percentage: 2.0,
///     cogs_percentage: 30.0,
///     ..Default::default()
/// });
///
/// let RevenueModel::Ticket(t) = evaluate_revenue(&model) else { unreachable!() };
/// assert_eq!(t.monthly_revenue, Some(60_000_000.0));
/// assert_eq!(t.total_transaction_fee, Some(1_200_000.0));
/// ```
pub fn evaluate_revenue(model: &RevenueModel) -> RevenueModel {
    evaluate_revenue_with(model, &CalculatorConfig::default())
}

/// Same as [`evaluate_revenue`] with injected constants.
pub fn evaluate_revenue_with(model: &RevenueModel, config: &CalculatorConfig) -> RevenueModel {
    let figures = model.breakdown(config);
    let mut evaluated = model.clone();
    evaluated.apply(&figures);
    evaluated
}

/// Figures for an optional model; `None` means zero revenue.
pub fn revenue_breakdown(model: Option<&RevenueModel>, config: &CalculatorConfig) -> RevenueBreakdown {
    model
        .map(|m| m.breakdown(config))
        .unwrap_or(RevenueBreakdown::ZERO)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QuantityBasedRevenue, TicketBasedRevenue};

    fn ticket(avg: f64, per_day: f64) -> RevenueModel {
        RevenueModel::Ticket(TicketBasedRevenue {
            average_ticket_size: avg,
            daily_tickets: per_day,
            mdr_percentage: 2.0,
            cogs_percentage: 30.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_ticket_based_figures() {
        let figures = ticket(100_000.0, 20.0).breakdown(&CalculatorConfig::default());
        assert_eq!(figures.daily_revenue, 2_000_000.0);
        assert_eq!(figures.monthly_revenue, 60_000_000.0);
        assert_eq!(figures.monthly_transaction_fee, 1_200_000.0);
        assert_eq!(figures.monthly_raw_materials_cost, 18_000_000.0);
    }

    #[test]
    fn test_quantity_based_figures() {
        let model = RevenueModel::Quantity(QuantityBasedRevenue {
            unit_price: 15_000.0,
            daily_quantity: 40.0,
            mdr_percentage: 0.0,
            cogs_percentage: 50.0,
            ..Default::default()
        });
        let RevenueModel::Quantity(q) = evaluate_revenue(&model) else {
            panic!("variant changed");
        };
        assert_eq!(q.daily_revenue, Some(600_000.0));
        assert_eq!(q.monthly_revenue, Some(18_000_000.0));
        assert_eq!(q.total_transaction_fee, Some(0.0));
        assert_eq!(q.total_raw_materials, Some(9_000_000.0));
        // Inputs survive untouched
        assert_eq!(q.unit_price, 15_000.0);
    }

    #[test]
    fn test_zero_rate_or_count_yields_zeros() {
        let config = CalculatorConfig::default();
        assert_eq!(ticket(0.0, 20.0).breakdown(&config), RevenueBreakdown::ZERO);
        assert_eq!(ticket(100_000.0, 0.0).breakdown(&config), RevenueBreakdown::ZERO);
        assert_eq!(ticket(f64::INFINITY, 0.0).breakdown(&config), RevenueBreakdown::ZERO);
    }

    #[test]
    fn test_missing_model_yields_zeros() {
        let figures = revenue_breakdown(None, &CalculatorConfig::default());
        assert_eq!(figures, RevenueBreakdown::ZERO);
    }

    #[test]
    fn test_custom_month_length() {
        let config = CalculatorConfig {
            days_per_month: 26.0,
            ..CalculatorConfig::default()
        };
        let figures = ticket(10_000.0, 10.0).breakdown(&config);
        assert_eq!(figures.monthly_revenue, 2_600_000.0);
    }
}
