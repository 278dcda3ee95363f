//! Invoice total calculator.
//!
//! Pure arithmetic, no I/O. The create form runs the same rules client-side
//! for live preview; this is the server-side source of truth used for
//! cross-checking submitted totals and for rendering.

use crate::types::LineItem;

/// Derived totals for a bill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Sum of `quantity * price` over all line items.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Compute subtotal, tax, and grand total for a bill.
///
/// `tax_rate` is a percentage (10 means 10%); `discount` is a flat amount
/// subtracted after tax. The grand total is floored at zero: no discount can
/// drive a bill negative. Non-finite inputs are treated as zero, matching
/// the lenient deserialization of form values.
#[must_use]
pub fn compute_totals(items: &[LineItem], tax_rate: f64, discount: f64) -> BillTotals {
    let subtotal = subtotal(items);
    let tax_amount = subtotal * sanitize(tax_rate) / 100.0;
    let grand_total = (subtotal + tax_amount - sanitize(discount)).max(0.0);
    BillTotals {
        subtotal,
        tax_amount,
        grand_total,
    }
}

/// Round to two decimal places for display.
///
/// Stored amounts keep the unrounded numeric value; rounding is a rendering
/// concern.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, quantity: f64, price: f64) -> LineItem {
        LineItem {
            description: description.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_empty_items_yield_zero_totals() {
        let totals = compute_totals(&[], 18.0, 50.0);
        assert!((totals.subtotal - 0.0).abs() < f64::EPSILON);
        assert!((totals.tax_amount - 0.0).abs() < f64::EPSILON);
        assert!((totals.grand_total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pen_and_book_scenario() {
        // 3 x 10 + 1 x 50 = 80, 10% tax = 8, minus 5 discount = 83
        let items = vec![item("Pen", 3.0, 10.0), item("Book", 1.0, 50.0)];
        let totals = compute_totals(&items, 10.0, 5.0);
        assert!((totals.subtotal - 80.0).abs() < 1e-9);
        assert!((totals.tax_amount - 8.0).abs() < 1e-9);
        assert!((totals.grand_total - 83.0).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_floored_at_zero() {
        let items = vec![item("Pen", 1.0, 10.0)];
        let totals = compute_totals(&items, 0.0, 1000.0);
        assert!((totals.grand_total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_rates_leave_subtotal_unchanged() {
        let items = vec![item("Notebook", 2.0, 25.0)];
        let totals = compute_totals(&items, 0.0, 0.0);
        assert!((totals.grand_total - totals.subtotal).abs() < f64::EPSILON);
        assert!((totals.grand_total - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_rates_treated_as_zero() {
        let items = vec![item("Pen", 2.0, 10.0)];
        let totals = compute_totals(&items, f64::NAN, f64::INFINITY);
        assert!((totals.tax_amount - 0.0).abs() < f64::EPSILON);
        assert!((totals.grand_total - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round2() {
        assert!((round2(83.004) - 83.0).abs() < 1e-9);
        assert!((round2(83.006) - 83.01).abs() < 1e-9);
        assert!((round2(10.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_quantities() {
        // 2.5 kg at 40.40 per kg
        let items = vec![item("Rice", 2.5, 40.40)];
        let totals = compute_totals(&items, 5.0, 0.0);
        assert!((totals.subtotal - 101.0).abs() < 1e-9);
        assert!((totals.tax_amount - 5.05).abs() < 1e-9);
        assert!((totals.grand_total - 106.05).abs() < 1e-9);
    }
}
