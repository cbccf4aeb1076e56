//! # Line-Item Aggregation
//!
//! Fills in each row's derived total and sums the list.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Variant          Derived field   Formula                              │
//! │  ───────────────  ─────────────   ─────────────────────────────────    │
//! │  PropertyCost     annual_rent     monthly_rent × quantity × 12         │
//! │  CapitalExpense   total_cost      unit_price × quantity                │
//! │  InventoryItem    total_cost      unit_price × quantity                │
//! │  OperationalCost  total_cost      monthly_cost × quantity              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are not guarded: negative or fractional values flow straight
//! through. Range checks belong to [`crate::validation`].

use serde::Serialize;

use crate::config::MONTHS_PER_YEAR;
use crate::types::{CapitalExpense, InventoryItem, OperationalCost, PropertyCost};

/// A row the aggregator knows how to total.
pub trait LineItem: Clone {
    /// Factor applied on top of `rate × quantity`.
    const PERIOD_FACTOR: f64 = 1.0;

    /// Monthly rent, unit price or monthly cost, depending on the variant.
    fn rate(&self) -> f64;

    fn quantity(&self) -> f64;

    /// Previously derived total, if any.
    fn derived_total(&self) -> Option<f64>;

    fn set_derived_total(&mut self, total: f64);

    /// Computes the derived total from the row's own inputs.
    fn compute_total(&self) -> f64 {
        self.rate() * self.quantity() * Self::PERIOD_FACTOR
    }
}

impl LineItem for PropertyCost {
    const PERIOD_FACTOR: f64 = MONTHS_PER_YEAR;

    fn rate(&self) -> f64 {
        self.monthly_rent
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn derived_total(&self) -> Option<f64> {
        self.annual_rent
    }

    fn set_derived_total(&mut self, total: f64) {
        self.annual_rent = Some(total);
    }
}

impl LineItem for CapitalExpense {
    fn rate(&self) -> f64 {
        self.unit_price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn derived_total(&self) -> Option<f64> {
        self.total_cost
    }

    fn set_derived_total(&mut self, total: f64) {
        self.total_cost = Some(total);
    }
}

impl LineItem for InventoryItem {
    fn rate(&self) -> f64 {
        self.unit_price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn derived_total(&self) -> Option<f64> {
        self.total_cost
    }

    fn set_derived_total(&mut self, total: f64) {
        self.total_cost = Some(total);
    }
}

impl LineItem for OperationalCost {
    fn rate(&self) -> f64 {
        self.monthly_cost
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn derived_total(&self) -> Option<f64> {
        self.total_cost
    }

    fn set_derived_total(&mut self, total: f64) {
        self.total_cost = Some(total);
    }
}

/// The rows with their totals filled in, plus the list total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate<T> {
    pub items: Vec<T>,
    pub total: f64,
}

/// Recomputes every row's derived total and sums them.
///
/// Rows keep their order. An empty list sums to 0.
///
/// ## Example
/// ```rust
/// use modalku_core::aggregate::aggregate;
/// use modalku_core::types::{PropertyCategory, PropertyCost};
///
/// let kiosk = PropertyCost::new(PropertyCategory::Kiosk, "Blok M", "unit")
///     .with_monthly_rent(2_000_000.0)
///     .with_quantity(2.0);
///
/// let result = aggregate(&[kiosk]);
/// assert_eq!(result.items[0].annual_rent, Some(48_000_000.0));
/// assert_eq!(result.total, 48_000_000.0);
/// ```
pub fn aggregate<T: LineItem>(items: &[T]) -> Aggregate<T> {
    let items: Vec<T> = items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            let total = item.compute_total();
            item.set_derived_total(total);
            item
        })
        .collect();

    let total = items
        .iter()
        .map(|item| item.derived_total().unwrap_or(0.0))
        .sum();

    Aggregate { items, total }
}

// =============================================================================
// Unit Tests
// =============================================================================
