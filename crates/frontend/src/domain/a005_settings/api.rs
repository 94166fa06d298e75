use contracts::domain::a005_settings::aggregate::StoreSettings;

use crate::shared::http;

pub async fn fetch_settings() -> Result<StoreSettings, String> {
    http::get("/settings").await
}

pub async fn save_settings(settings: &StoreSettings) -> Result<StoreSettings, String> {
    http::put("/settings", settings).await
}
