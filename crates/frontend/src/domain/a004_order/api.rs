//! Orders resource service. Orders cannot be deleted from the dashboard;
//! the only mutation is the status control.

use contracts::domain::a004_order::aggregate::{Order, SetOrderStatus};
use contracts::enums::OrderStatus;

use crate::shared::http;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    http::get("/orders").await
}

pub async fn fetch_order(id: &str) -> Result<Order, String> {
    http::get(&format!("/orders/{}", urlencoding::encode(id))).await
}

pub async fn set_status(id: &str, status: OrderStatus) -> Result<Order, String> {
    http::put(
        &format!("/orders/{}/status", urlencoding::encode(id)),
        &SetOrderStatus { status },
    )
    .await
}
