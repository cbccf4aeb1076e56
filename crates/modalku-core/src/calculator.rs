//! # Business Result Calculator
//!
//! Composes aggregation and revenue evaluation into the full set of figures
//! shown in the results panel.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. property costs  ──► total_property_costs (annual)                  │
//! │  2. capital expenses ──► subtotal + contingency (10 %)                  │
//! │  3. inventory        ──► total_inventory                                │
//! │  4. operational      ──► monthly total, buffer cash (3 ×)               │
//! │  5. initial investment = capex + inventory + buffer + annual rent / 12  │
//! │  6. revenue model    ──► revenue, MDR fee, raw materials                │
//! │  7. net profit = revenue − fee − materials − operational − rent / 12    │
//! │  8. payback = investment / net profit   (∞ when profit ≤ 0)             │
//! │  9. recommendation tier from payback months                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Month of Rent, Twice
//! `annual rent / 12` appears both in the initial investment and as a
//! monthly deduction from profit. That is how the figures have always been
//! reported (a first month paid up front, then rent every month) and it is
//! kept for parity. See DESIGN.md.
//!
//! Results are rebuilt from scratch on every call; nothing is cached.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::aggregate::aggregate;
use crate::config::{CalculatorConfig, MONTHS_PER_YEAR};
use crate::recommendation::{recommend, Recommendation};
use crate::revenue::revenue_breakdown;
use crate::types::BusinessScenario;

/// Every figure derived from one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    /// Annualised rent of all properties.
    pub total_property_costs: f64,

    /// Capital expenses before the contingency markup.
    pub capital_expenses_subtotal: f64,

    pub contingency_amount: f64,

    /// Capital expenses including contingency.
    pub total_capital_expenses: f64,

    pub total_inventory: f64,

    pub total_monthly_operational_costs: f64,

    pub buffer_cash: f64,

    pub total_initial_investment: f64,

    pub monthly_revenue: f64,

    pub monthly_transaction_fee: f64,

    pub monthly_raw_materials_cost: f64,

    pub monthly_net_profit: f64,

    /// `+∞` when the business never pays back.
    #[serde(with = "crate::non_finite")]
    #[ts(type = "number | \"Infinity\"")]
    pub payback_period_months: f64,

    #[serde(with = "crate::non_finite")]
    #[ts(type = "number | \"Infinity\"")]
    pub payback_period_years: f64,

    pub recommendation: Recommendation,
}

impl CalculationResults {
    /// One month of the annualised rent.
    #[inline]
    pub fn monthly_property_cost(&self) -> f64 {
        self.total_property_costs / MONTHS_PER_YEAR
    }

    /// Returns true if the plan ever recovers its initial investment.
    #[inline]
    pub fn pays_back(&self) -> bool {
        self.payback_period_months.is_finite()
    }
}

/// Calculates the full results with the default business constants.
///
/// ## Example
/// ```rust
/// use modalku_core::calculator::calculate_results;
/// use modalku_core::types::BusinessScenario;
///
/// let results = calculate_results(&BusinessScenario::new("Kosong"));
/// assert_eq!(results.total_initial_investment, 0.0);
/// assert!(results.payback_period_months.is_infinite());
/// ```
pub fn calculate_results(scenario: &BusinessScenario) -> CalculationResults {
    calculate_results_with(scenario, &CalculatorConfig::default())
}

/// Calculates the full results with injected business constants.
pub fn calculate_results_with(
    scenario: &BusinessScenario,
    config: &CalculatorConfig,
) -> CalculationResults {
    debug!(business = %scenario.business_name, model = ?scenario.business_model(), "Calculating business results");

    let total_property_costs = aggregate(&scenario.property_costs).total;

    let capital_expenses_subtotal = aggregate(&scenario.capital_expenses).total;
    let contingency_amount = capital_expenses_subtotal * config.contingency_percentage / 100.0;
    let total_capital_expenses = capital_expenses_subtotal + contingency_amount;

    let total_inventory = aggregate(&scenario.inventory).total;

    let total_monthly_operational_costs = aggregate(&scenario.operational_costs).total;
    let buffer_cash = total_monthly_operational_costs * config.buffer_cash_multiplier;

    let monthly_property_cost = total_property_costs / MONTHS_PER_YEAR;
    let total_initial_investment =
        total_capital_expenses + total_inventory + buffer_cash + monthly_property_cost;

    trace!(
        total_property_costs,
        total_capital_expenses,
        total_inventory,
        buffer_cash,
        total_initial_investment,
        "Aggregated cost lists"
    );

    let revenue = revenue_breakdown(scenario.revenue.as_ref(), config);

    let monthly_net_profit = revenue.monthly_revenue
        - revenue.monthly_transaction_fee
        - revenue.monthly_raw_materials_cost
        - total_monthly_operational_costs
        - monthly_property_cost;

    let payback_period_months = if monthly_net_profit > 0.0 {
        total_initial_investment / monthly_net_profit
    } else {
        f64::INFINITY
    };
    let payback_period_years = payback_period_months / MONTHS_PER_YEAR;

    let recommendation = recommend(payback_period_months, &config.recommendation);

    debug!(
        monthly_net_profit,
        payback_period_months,
        tier = ?recommendation.tier,
        "Business results ready"
    );

    CalculationResults {
        total_property_costs,
        capital_expenses_subtotal,
        contingency_amount,
        total_capital_expenses,
        total_inventory,
        total_monthly_operational_costs,
        buffer_cash,
        total_initial_investment,
        monthly_revenue: revenue.monthly_revenue,
        monthly_transaction_fee: revenue.monthly_transaction_fee,
        monthly_raw_materials_cost: revenue.monthly_raw_materials_cost,
        monthly_net_profit,
        payback_period_months,
        payback_period_years,
        recommendation,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationTier;
    use crate::types::{
        CapexCategory, CapitalExpense, OperationalCategory, OperationalCost, QuantityBasedRevenue,
        RevenueModel,
    };

    fn small_stall() -> BusinessScenario {
        BusinessScenario {
            business_name: "Es Teh".into(),
            revenue: Some(RevenueModel::Quantity(QuantityBasedRevenue {
                unit_price: 5_000.0,
                daily_quantity: 100.0,
                mdr_percentage: 0.0,
                cogs_percentage: 40.0,
                ..Default::default()
            })),
            capital_expenses: vec![CapitalExpense::new(CapexCategory::Machinery, "Gerobak", "unit")
                .with_unit_price(2_000_000.0)],
            operational_costs: vec![OperationalCost::new(
                OperationalCategory::Salaries,
                "Penjaga",
                "orang",
            )
            .with_monthly_cost(2_500_000.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_contingency_and_buffer() {
        let results = calculate_results(&small_stall());
        assert_eq!(results.capital_expenses_subtotal, 2_000_000.0);
        assert_eq!(results.contingency_amount, 200_000.0);
        assert_eq!(results.total_capital_expenses, 2_200_000.0);
        assert_eq!(results.buffer_cash, 7_500_000.0);
        assert_eq!(results.total_initial_investment, 9_700_000.0);
    }

    #[test]
    fn test_quantity_model_profit() {
        let results = calculate_results(&small_stall());
        // 5,000 × 100 × 30 = 15,000,000; 40 % materials = 6,000,000
        assert_eq!(results.monthly_revenue, 15_000_000.0);
        assert_eq!(results.monthly_raw_materials_cost, 6_000_000.0);
        assert_eq!(results.monthly_net_profit, 6_500_000.0);
        assert!((results.payback_period_months - 9_700_000.0 / 6_500_000.0).abs() < 1e-12);
        assert_eq!(results.recommendation.tier, RecommendationTier::Excellent);
        assert!(results.pays_back());
    }

    #[test]
    fn test_missing_revenue_model_never_pays_back() {
        let mut scenario = small_stall();
        scenario.revenue = None;
        let results = calculate_results(&scenario);
        assert_eq!(results.monthly_revenue, 0.0);
        assert_eq!(results.monthly_transaction_fee, 0.0);
        assert_eq!(results.monthly_raw_materials_cost, 0.0);
        assert!(results.monthly_net_profit < 0.0);
        assert_eq!(results.payback_period_months, f64::INFINITY);
        assert_eq!(results.payback_period_years, f64::INFINITY);
        assert_eq!(results.recommendation.tier, RecommendationTier::Poor);
        assert!(!results.pays_back());
    }

    #[test]
    fn test_zero_profit_is_infinite_not_nan() {
        let results = calculate_results(&BusinessScenario::new("Nol"));
        assert_eq!(results.monthly_net_profit, 0.0);
        assert!(results.payback_period_months.is_infinite());
        assert!(!results.payback_period_months.is_nan());
    }

    #[test]
    fn test_injected_constants() {
        let config = CalculatorConfig {
            contingency_percentage: 0.0,
            buffer_cash_multiplier: 1.0,
            ..CalculatorConfig::default()
        };
        let results = calculate_results_with(&small_stall(), &config);
        assert_eq!(results.total_capital_expenses, 2_000_000.0);
        assert_eq!(results.buffer_cash, 2_500_000.0);
    }

    #[test]
    fn test_results_json_keeps_infinity() {
        let results = calculate_results(&BusinessScenario::new("Nol"));
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["paybackPeriodMonths"], "Infinity");
        assert_eq!(json["recommendation"]["label"], "Kurang Baik");

        let back: CalculationResults = serde_json::from_value(json).unwrap();
        assert_eq!(back, results);
    }
}
