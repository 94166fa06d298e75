use serde::{Deserialize, Serialize};

/// Fulfillment state of an order. The backend stores the plain variant
/// name; transitions are not constrained client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Completed,
    Failed,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Failed => "Failed",
        }
    }

    /// CSS modifier for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status--pending",
            OrderStatus::Processing => "status--processing",
            OrderStatus::Shipped => "status--shipped",
            OrderStatus::Completed => "status--completed",
            OrderStatus::Failed => "status--failed",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Failed,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.display_name() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_variant_name() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"Shipped\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"Failed\"").unwrap();
        assert_eq!(parsed, OrderStatus::Failed);
    }

    #[test]
    fn test_parse_round_trips_display_name() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(status.display_name()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Cancelled"), None);
    }
}
