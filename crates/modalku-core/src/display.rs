//! # Display Helpers
//!
//! Text renderings for the results panel that cope with the non-finite
//! values the calculator returns on purpose.
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────┐
//! │ value                        │ rendered                 │
//! ├──────────────────────────────┼──────────────────────────┤
//! │ 50_500_000.0 (rupiah)        │ "Rp 50.500.000"          │
//! │ -1_250.4 (rupiah)            │ "-Rp 1.250"              │
//! │ 1.8165… (months)             │ "1.8"                    │
//! │ +∞ (payback)                 │ "tidak terbatas"         │
//! │ NaN (share of zero total)    │ "N/A"                    │
//! └──────────────────────────────┴──────────────────────────┘
//! ```
//!
//! Turning typed-in currency strings back into numbers stays on the form
//! side.

/// Rendering of an infinite quantity ("unlimited").
pub const UNLIMITED: &str = "tidak terbatas";

/// Rendering of an undefined quantity.
pub const NOT_AVAILABLE: &str = "N/A";

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NOT_AVAILABLE)
    } else if value.is_infinite() {
        Some(UNLIMITED)
    } else {
        None
    }
}

/// Formats a rupiah amount with Indonesian digit grouping and no decimals.
///
/// ## Example
/// ```rust
/// use modalku_core::display::format_rupiah;
///
/// assert_eq!(format_rupiah(1_000_000.0), "Rp 1.000.000");
/// assert_eq!(format_rupiah(f64::INFINITY), "tidak terbatas");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    if let Some(text) = non_finite(amount) {
        return text.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}Rp {}", sign, grouped)
}

/// Formats a payback period in months with one decimal.
pub fn format_months(months: f64) -> String {
    match non_finite(months) {
        Some(text) => text.to_string(),
        None => format!("{:.1}", months),
    }
}

/// Formats a payback period in years with two decimals.
pub fn format_years(years: f64) -> String {
    match non_finite(years) {
        Some(text) => text.to_string(),
        None => format!("{:.2}", years),
    }
}

/// Formats a share with one decimal and a percent sign.
pub fn format_percentage(percentage: f64) -> String {
    match non_finite(percentage) {
        Some(text) => text.to_string(),
        None => format!("{:.1}%", percentage),
    }
}
