//! Products resource service: pass-throughs to the gateway with path
//! templating. Each call resolves with the decoded resource payload.

use contracts::domain::a001_product::aggregate::{Product, ProductForm, SetVariantGroup};

use crate::shared::http;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    http::get("/products").await
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    http::get(&format!("/products/{}", urlencoding::encode(id))).await
}

pub async fn create_product(form: &ProductForm) -> Result<Product, String> {
    http::post("/products", form).await
}

pub async fn update_product(id: &str, form: &ProductForm) -> Result<Product, String> {
    http::put(&format!("/products/{}", urlencoding::encode(id)), form).await
}

/// Relink a product to a variant group; an empty name clears membership.
pub async fn set_variant_group(id: &str, group_name: &str) -> Result<Product, String> {
    http::patch(
        &format!("/products/{}", urlencoding::encode(id)),
        &SetVariantGroup {
            variant_group: group_name.to_string(),
        },
    )
    .await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    http::delete(&format!("/products/{}", urlencoding::encode(id))).await
}
