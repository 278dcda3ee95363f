//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format a monetary amount with two decimal places.
///
/// Usage in templates: `{{ bill.grand_total|money }}`
#[askama::filter_fn]
pub fn money(
    value: impl std::borrow::Borrow<f64>,
    _env: &dyn askama::Values,
) -> askama::Result<String> {
    Ok(format!("{:.2}", billbook_core::round2(*value.borrow())))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format a bill date for display.
///
/// Bill dates come from the client's date input as `YYYY-MM-DD`; anything
/// that does not parse is shown as-is.
///
/// Usage in templates: `{{ bill.bill_date|bill_date }}`
#[askama::filter_fn]
pub fn bill_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_bill_date(&value.to_string()))
}

fn format_bill_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or_else(
        |_| raw.to_string(),
        |date| date.format("%d %b %Y").to_string(),
    )
}
