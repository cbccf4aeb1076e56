//! # modalku-core: Pure Financial Engine for Modalku
//!
//! This crate turns a business plan (startup costs, running costs and a
//! revenue model) into initial investment, monthly profit, payback period
//! and chart series. Every function is pure and synchronous.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Modalku Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Calculator Form (web UI)                        │   │
//! │  │   Property ─► Capex ─► Inventory ─► Operational ─► Revenue      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BusinessScenario (JSON / TS types)     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ modalku-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │ aggregate │─►│calculator │◄─│  revenue   │  │validation │  │   │
//! │  │   │ line items│  │ results   │  │ ticket/qty │  │ form rules│  │   │
//! │  │   └───────────┘  └─────┬─────┘  └────────────┘  └───────────┘  │   │
//! │  │                        ▼                                        │   │
//! │  │                  ┌───────────┐   ┌────────────────┐            │   │
//! │  │                  │  charts   │   │ recommendation │            │   │
//! │  │                  └───────────┘   └────────────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO TIMERS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Scenario, line items, revenue models
//! - [`aggregate`] - Per-row totals and list sums
//! - [`revenue`] - Daily/monthly revenue, MDR fee, raw materials
//! - [`calculator`] - Full results bundle and payback period
//! - [`recommendation`] - Payback tiers
//! - [`charts`] - Cost breakdown and cash flow series
//! - [`config`] - Injectable business constants
//! - [`validation`] - Optional form rules and readiness check
//! - [`display`] - Text rendering that handles ∞ and NaN
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same scenario in, bit-identical results out
//! 2. **No I/O**: configuration files and logging setup live in `modalku-config`
//! 3. **Special values are results**: unprofitable plans have an infinite
//!    payback period; an empty plan has NaN cost shares
//! 4. **Recompute, never patch**: derived fields are rebuilt on each call
//!
//! ## Example Usage
//!
//! ```rust
//! use modalku_core::{calculate_results, cash_flow, cost_breakdown};
//! use modalku_core::types::*;
//!
//! let scenario = BusinessScenario {
//!     business_name: "Kedai Kopi".into(),
//!     revenue: Some(RevenueModel::Ticket(TicketBasedRevenue {
//!         average_ticket_size: 100_000.0,
//!         daily_tickets: 20.0,
//!         mdr_percentage: 2.0,
//!         cogs_percentage: 30.0,
//!         ..Default::default()
//!     })),
//!     property_costs: vec![PropertyCost::new(PropertyCategory::LandOrPlace, "Ruko", "bulan")
//!         .with_monthly_rent(5_000_000.0)],
//!     capital_expenses: vec![CapitalExpense::new(CapexCategory::Machinery, "Mesin Espresso", "unit")
//!         .with_unit_price(15_000_000.0)],
//!     inventory: vec![InventoryItem::new(InventoryCategory::RawMaterials, "Biji Kopi", "paket")
//!         .with_unit_price(5_000_000.0)],
//!     operational_costs: vec![OperationalCost::new(OperationalCategory::Salaries, "Barista", "bulan")
//!         .with_monthly_cost(8_000_000.0)],
//! };
//!
//! let results = calculate_results(&scenario);
//! assert_eq!(results.total_initial_investment, 50_500_000.0);
//! assert_eq!(results.monthly_net_profit, 27_800_000.0);
//! assert_eq!(results.recommendation.label, "Sangat Baik");
//!
//! assert_eq!(cost_breakdown(&results).len(), 4);
//! assert_eq!(cash_flow(&results).len(), 36);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod calculator;
pub mod charts;
pub mod config;
pub mod display;
pub mod error;
pub mod recommendation;
pub mod revenue;
pub mod types;
pub mod validation;

mod non_finite;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use modalku_core::calculate_results` instead of
// `use modalku_core::calculator::calculate_results`

pub use aggregate::{aggregate, Aggregate, LineItem};
pub use calculator::{calculate_results, calculate_results_with, CalculationResults};
pub use charts::{
    break_even_month, cash_flow, cash_flow_for_months, cash_flow_with, cost_breakdown,
    CashFlowPoint, CostBreakdownEntry, CostComponent,
};
pub use config::CalculatorConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use recommendation::{Recommendation, RecommendationTier, Severity};
pub use revenue::{evaluate_revenue, evaluate_revenue_with, RevenueBreakdown};
pub use types::{BusinessModel, BusinessScenario, RevenueModel};
