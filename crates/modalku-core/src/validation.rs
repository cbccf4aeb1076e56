//! # Validation Module
//!
//! Input rules for a business scenario, matching what the calculator form
//! checks before it submits.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (TypeScript)                                            │
//! │  ├── Currency strings parsed to numbers                                │
//! │  └── Immediate field feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (optional, caller-invoked)                       │
//! │  ├── Ranges: rate ≥ 0, quantity ≥ 1, percentages 0-100                 │
//! │  └── Readiness: enough input to show results at all                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Pure arithmetic, no checks, never fails                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use modalku_core::validation::{validate_percentage, validate_quantity};
//!
//! assert!(validate_quantity("quantity", 2.0).is_ok());
//! assert!(validate_percentage("mdrPercentage", 101.0).is_err());
//! ```

use std::collections::HashSet;

use crate::aggregate::LineItem;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{BusinessScenario, RevenueModel};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the business name (required, non-blank).
pub fn validate_business_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "businessName".to_string(),
        });
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a monetary rate or a daily count.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed)
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: 0.0,
        });
    }

    Ok(())
}

/// Validates a line item quantity (at least 1).
pub fn validate_quantity(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;

    if value < 1.0 {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: 1.0,
        });
    }

    Ok(())
}

/// Validates an MDR or COGS percentage (0 to 100 inclusive).
pub fn validate_percentage(field: &str, value: f64) -> ValidationResult<()> {
    require_finite(field, value)?;

    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Checks one line item list and appends every violation to `errors`.
///
/// `list` names the list in field paths, e.g. `capitalExpenses[2].quantity`.
fn collect_line_item_errors<T>(list: &str, items: &[T], id_of: impl Fn(&T) -> &str, errors: &mut Vec<ValidationError>)
where
    T: LineItem,
{
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        let path = |field: &str| format!("{}[{}].{}", list, index, field);
        let id = id_of(item);

        if id.trim().is_empty() {
            errors.push(ValidationError::Required { field: path("id") });
        } else if !seen.insert(id) {
            errors.push(ValidationError::Duplicate {
                field: format!("{}.id", list),
                value: id.to_string(),
            });
        }

        if let Err(e) = validate_non_negative(&path("rate"), item.rate()) {
            errors.push(e);
        }
        if let Err(e) = validate_quantity(&path("quantity"), item.quantity()) {
            errors.push(e);
        }
    }
}

fn collect_revenue_errors(model: &RevenueModel, errors: &mut Vec<ValidationError>) {
    let (rate_field, count_field) = match model {
        RevenueModel::Ticket(_) => ("averageTicketSize", "dailyTickets"),
        RevenueModel::Quantity(_) => ("unitPrice", "dailyQuantity"),
    };

    let checks = [
        validate_non_negative(rate_field, model.rate()),
        validate_non_negative(count_field, model.daily_count()),
        validate_percentage("mdrPercentage", model.mdr_percentage()),
        validate_percentage("cogsPercentage", model.cogs_percentage()),
    ];
    errors.extend(checks.into_iter().filter_map(Result::err));
}

/// A form value counts as filled when it is neither zero nor NaN.
fn is_filled(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

// =============================================================================
// Scenario Validation
// =============================================================================

impl BusinessScenario {
    /// Returns every rule violation in the scenario (empty when valid).
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = validate_business_name(&self.business_name) {
            errors.push(e);
        }

        collect_line_item_errors("propertyCosts", &self.property_costs, |i| i.id.as_str(), &mut errors);
        collect_line_item_errors("capitalExpenses", &self.capital_expenses, |i| i.id.as_str(), &mut errors);
        collect_line_item_errors("inventory", &self.inventory, |i| i.id.as_str(), &mut errors);
        collect_line_item_errors("operationalCosts", &self.operational_costs, |i| i.id.as_str(), &mut errors);

        if let Some(model) = &self.revenue {
            collect_revenue_errors(model, &mut errors);
        }

        errors
    }

    /// Fails with the first rule violation, if any.
    pub fn validate_strict(&self) -> CoreResult<()> {
        match self.validate().into_iter().next() {
            Some(first) => Err(CoreError::Validation(first)),
            None => Ok(()),
        }
    }

    /// Returns true when there is enough input to show results.
    ///
    /// ## Rules
    /// - At least one property cost or capital expense
    /// - At least one operational cost
    /// - A revenue model whose rate and daily count are both non-zero and
    ///   not NaN
    ///
    /// The calculator itself works on any scenario; this only decides
    /// whether presenting its output is meaningful.
    pub fn is_ready_for_calculation(&self) -> bool {
        let has_setup_costs = !self.property_costs.is_empty() || !self.capital_expenses.is_empty();
        let has_operational = !self.operational_costs.is_empty();
        let has_revenue = self
            .revenue
            .as_ref()
            .is_some_and(|m| is_filled(m.rate()) && is_filled(m.daily_count()));

        has_setup_costs && has_operational && has_revenue
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
