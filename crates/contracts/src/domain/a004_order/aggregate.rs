use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

/// Storefront order. Monetary figures are computed server-side and trusted
/// as given; every nested block may be absent and decodes to defaults so
/// partial documents render instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub customer_details: CustomerDetails,

    #[serde(default)]
    pub ordered_items: Vec<OrderedItem>,

    #[serde(default)]
    pub payment_summary: PaymentSummary,

    #[serde(default)]
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItem {
    #[serde(default)]
    pub item_name: String,

    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub total_price: f64,

    #[serde(default)]
    pub image: Option<String>,
}

impl OrderedItem {
    /// Line total, recomputed from unit price when the backend omitted it.
    pub fn line_total(&self) -> f64 {
        if self.total_price > 0.0 {
            self.total_price
        } else {
            self.unit_price * f64::from(self.quantity)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub shipping: f64,

    #[serde(default)]
    pub tax: f64,

    #[serde(default)]
    pub total: f64,
}

/// Payload for the status control on the orders page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetOrderStatus {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_order_decodes() {
        let order: Order = serde_json::from_str(
            r#"{
                "_id": "abc123",
                "createdAt": "2026-01-15T10:00:00Z",
                "customerDetails": { "name": "J. Doe" },
                "orderedItems": [
                    { "itemName": "Widget", "unitPrice": 100, "quantity": 2, "totalPrice": 200 }
                ],
                "paymentSummary": { "subtotal": 200, "shipping": 0, "tax": 36, "total": 236 }
            }"#,
        )
        .unwrap();
        assert_eq!(order.customer_details.name, "J. Doe");
        assert_eq!(order.ordered_items.len(), 1);
        assert_eq!(order.ordered_items[0].line_total(), 200.0);
        assert_eq!(order.payment_summary.total, 236.0);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_bare_order_decodes_to_defaults() {
        let order: Order = serde_json::from_str(r#"{ "_id": "abc123" }"#).unwrap();
        assert_eq!(order.customer_details.name, "");
        assert!(order.ordered_items.is_empty());
        assert_eq!(order.payment_summary.subtotal, 0.0);
        assert!(order.created_at.is_none());
    }

    #[test]
    fn test_line_total_falls_back_to_unit_price() {
        let item: OrderedItem = serde_json::from_str(
            r#"{ "itemName": "Widget", "unitPrice": 50, "quantity": 3 }"#,
        )
        .unwrap();
        assert_eq!(item.line_total(), 150.0);
    }
}
