//! Bill records and line items.
//!
//! Bills are immutable once created: the ledger appends them and the history
//! view reads them back, nothing updates or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One product or service row on a bill.
///
/// The line total (`quantity * price`) is recomputed on demand and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub description: String,
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
}

impl LineItem {
    /// Amount for this row.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// A persisted invoice record.
///
/// `id` and `created_at` are stamped server-side at append time; everything
/// else is the client payload stored as submitted. In particular
/// `grand_total` is the client-computed value, accepted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Uuid,
    #[serde(default)]
    pub bill_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tax_rate: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub grand_total: f64,
    /// Client-entered bill date (form date string, kept as submitted).
    #[serde(default)]
    pub bill_date: String,
    /// Public path to an uploaded signature image, or empty.
    #[serde(default)]
    pub signature: String,
    pub created_at: DateTime<Utc>,
}

/// Client payload for creating a bill: a [`Bill`] minus the server-stamped
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillInput {
    pub bill_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<LineItem>,
    #[serde(deserialize_with = "lenient_number")]
    pub tax_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub discount: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub grand_total: f64,
    pub bill_date: String,
    pub signature: String,
}

impl BillInput {
    /// Promote the input to a stored [`Bill`] with server-stamped identity
    /// and creation time.
    #[must_use]
    pub fn into_bill(self, id: Uuid, created_at: DateTime<Utc>) -> Bill {
        Bill {
            id,
            bill_number: self.bill_number,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            items: self.items,
            tax_rate: self.tax_rate,
            discount: self.discount,
            grand_total: self.grand_total,
            bill_date: self.bill_date,
            signature: self.signature,
            created_at,
        }
    }
}

/// Deserialize a number leniently: JSON numbers pass through, numeric strings
/// parse, and anything else (null, other strings, objects) becomes 0.
///
/// Form values arrive from loosely-typed clients; treating garbage as zero
/// keeps a bad field from blocking submission.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if number.is_finite() { number } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem {
            description: "Pen".to_string(),
            quantity: 3.0,
            price: 10.0,
        };
        assert!((item.line_total() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lenient_number_accepts_numeric_string() {
        let item: LineItem =
            serde_json::from_str(r#"{"description":"Pen","quantity":"3","price":"10.5"}"#)
                .expect("valid json");
        assert!((item.quantity - 3.0).abs() < f64::EPSILON);
        assert!((item.price - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lenient_number_treats_garbage_as_zero() {
        let item: LineItem =
            serde_json::from_str(r#"{"description":"Pen","quantity":"lots","price":null}"#)
                .expect("valid json");
        assert!((item.quantity - 0.0).abs() < f64::EPSILON);
        assert!((item.price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bill_input_defaults() {
        let input: BillInput = serde_json::from_str("{}").expect("valid json");
        assert!(input.items.is_empty());
        assert!((input.tax_rate - 0.0).abs() < f64::EPSILON);
        assert!((input.discount - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_into_bill_stamps_identity() {
        let input: BillInput = serde_json::from_str(
            r#"{"billNumber":"INV-001","customerName":"Asha","grandTotal":83.0}"#,
        )
        .expect("valid json");
        let id = Uuid::new_v4();
        let now = Utc::now();
        let bill = input.into_bill(id, now);
        assert_eq!(bill.id, id);
        assert_eq!(bill.created_at, now);
        assert_eq!(bill.bill_number, "INV-001");
        assert_eq!(bill.customer_name, "Asha");
    }

    #[test]
    fn test_bill_wire_format_is_camel_case() {
        let bill = BillInput {
            bill_number: "INV-002".to_string(),
            ..BillInput::default()
        }
        .into_bill(Uuid::new_v4(), Utc::now());
        let json = serde_json::to_value(&bill).expect("serializable");
        assert!(json.get("billNumber").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("grandTotal").is_some());
        assert!(json.get("bill_number").is_none());
    }
}
