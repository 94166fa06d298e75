use contracts::domain::a002_category::aggregate::{Category, CategoryForm};

use crate::shared::http;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    http::get("/categories").await
}

pub async fn create_category(form: &CategoryForm) -> Result<Category, String> {
    http::post("/categories", form).await
}

pub async fn update_category(id: &str, form: &CategoryForm) -> Result<Category, String> {
    http::put(&format!("/categories/{}", urlencoding::encode(id)), form).await
}

pub async fn delete_category(id: &str) -> Result<(), String> {
    http::delete(&format!("/categories/{}", urlencoding::encode(id))).await
}
