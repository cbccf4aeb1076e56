//! # Chart Series
//!
//! Data for the two charts under the results panel: the initial investment
//! doughnut and the cumulative cash flow line.
//!
//! ## Cash Flow Shape
//! ```text
//!   cumulative
//!      ▲
//!      │                                   ╱
//!    0 ┼─────────────────────────────╳───╱────  ← break-even month
//!      │                        ╱
//!      │                 ╱
//!      │          ╱
//!   -I ┼   ●  (month 1 = −investment + monthly profit)
//!      └──────────────────────────────────────► month
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculationResults;
use crate::config::CalculatorConfig;

// =============================================================================
// Cost Breakdown
// =============================================================================

/// The four parts of the initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    CapitalExpenses,
    Inventory,
    BufferCash,
    FirstMonthRent,
}

impl CostComponent {
    /// Legend label used by the chart.
    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::CapitalExpenses => "Modal Awal",
            CostComponent::Inventory => "Inventaris Awal",
            CostComponent::BufferCash => "Buffer Cash",
            CostComponent::FirstMonthRent => "Sewa Awal",
        }
    }
}

/// One slice of the investment doughnut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownEntry {
    pub component: CostComponent,
    pub name: String,
    pub value: f64,
    /// Share of the total initial investment, 0-100. NaN when the
    /// investment is zero.
    #[serde(with = "crate::non_finite")]
    #[ts(type = "number | \"NaN\" | \"Infinity\" | \"-Infinity\"")]
    pub percentage: f64,
}

/// Splits the initial investment into its four components.
///
/// Percentages divide by `total_initial_investment` without a guard: a zero
/// investment produces NaN, which callers must handle when rendering (see
/// [`crate::display::format_percentage`]).
pub fn cost_breakdown(results: &CalculationResults) -> Vec<CostBreakdownEntry> {
    let total = results.total_initial_investment;

    [
        (CostComponent::CapitalExpenses, results.total_capital_expenses),
        (CostComponent::Inventory, results.total_inventory),
        (CostComponent::BufferCash, results.buffer_cash),
        (CostComponent::FirstMonthRent, results.monthly_property_cost()),
    ]
    .into_iter()
    .map(|(component, value)| CostBreakdownEntry {
        component,
        name: component.label().to_string(),
        value,
        percentage: value / total * 100.0,
    })
    .collect()
}

// =============================================================================
// Cash Flow
// =============================================================================

/// One month of the cash flow projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    /// 1-based month number.
    pub month: u32,
    pub profit: f64,
    pub cumulative_profit: f64,
}

/// Projects the cumulative cash position over the configured horizon
/// (36 months by default).
pub fn cash_flow(results: &CalculationResults) -> Vec<CashFlowPoint> {
    cash_flow_with(results, &CalculatorConfig::default())
}

/// Same as [`cash_flow`] with the horizon taken from `config`.
pub fn cash_flow_with(results: &CalculationResults, config: &CalculatorConfig) -> Vec<CashFlowPoint> {
    cash_flow_for_months(results, config.charts.cash_flow_horizon_months)
}

/// Projects `months` points. The position starts at `-investment` and each
/// month adds the net profit, so the first point already includes one
/// month's profit.
///
/// ## Example
/// ```rust
/// use modalku_core::calculator::calculate_results;
/// use modalku_core::charts::cash_flow_for_months;
/// use modalku_core::types::BusinessScenario;
///
/// let results = calculate_results(&BusinessScenario::new("Kosong"));
/// let series = cash_flow_for_months(&results, 12);
/// assert_eq!(series.len(), 12);
/// assert_eq!(series[11].month, 12);
/// ```
pub fn cash_flow_for_months(results: &CalculationResults, months: u32) -> Vec<CashFlowPoint> {
    let profit = results.monthly_net_profit;
    let mut cumulative_profit = -results.total_initial_investment;

    (1..=months)
        .map(|month| {
            cumulative_profit += profit;
            CashFlowPoint {
                month,
                profit,
                cumulative_profit,
            }
        })
        .collect()
}

/// The month to mark as "Balik Modal" on the cash flow chart.
///
/// Rounds the payback period to the nearest month and returns it only when
/// it falls within a series of `series_len` points.
pub fn break_even_month(results: &CalculationResults, series_len: usize) -> Option<u32> {
    let payback = results.payback_period_months;
    if !payback.is_finite() {
        return None;
    }

    let month = payback.round();
    if month > 0.0 && month <= series_len as f64 {
        Some(month as u32)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
