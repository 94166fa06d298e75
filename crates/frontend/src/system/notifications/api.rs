use contracts::system::notifications::Notification;

use crate::shared::http;

pub async fn fetch_notifications() -> Result<Vec<Notification>, String> {
    http::get("/notifications").await
}

pub async fn mark_read(id: &str) -> Result<Notification, String> {
    http::put(
        &format!("/notifications/{}/read", urlencoding::encode(id)),
        &serde_json::json!({}),
    )
    .await
}

pub async fn clear_all() -> Result<(), String> {
    http::delete("/notifications").await
}
