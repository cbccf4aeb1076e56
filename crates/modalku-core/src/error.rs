//! # Error Types
//!
//! Domain-specific error types for modalku-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  modalku-core errors (this file)                                       │
//! │  ├── CoreError        - Payload, config and validation failures        │
//! │  └── ValidationError  - Form input rule violations                     │
//! │                                                                         │
//! │  modalku-config errors (separate crate)                                │
//! │  └── ConfigError      - File / TOML / environment failures             │
//! │                                                                         │
//! │  NOTE: the calculation pipeline itself never fails. An unprofitable    │
//! │  scenario yields an infinite payback period, not an error.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors raised around (never inside) the calculation pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The scenario JSON sent by the form could not be decoded.
    #[error("Invalid scenario payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// A calculator constant is out of its allowed range.
    ///
    /// ## When This Occurs
    /// - Negative contingency percentage or buffer multiplier
    /// - `days_per_month` of zero
    /// - Recommendation thresholds not in ascending order
    #[error("Invalid calculator configuration: {0}")]
    InvalidConfig(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the rules the calculator form enforces before it hands a
/// scenario to the engine. The engine does not call them implicitly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: f64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Duplicate identifier within one line item list.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
