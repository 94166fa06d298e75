//! Variant groups resource service. Groups cannot be renamed — the
//! name-based product linkage makes the name immutable once created.

use contracts::domain::a003_variant_group::aggregate::{VariantGroup, VariantGroupForm};

use crate::shared::http;

pub async fn fetch_groups() -> Result<Vec<VariantGroup>, String> {
    http::get("/variant-groups").await
}

pub async fn create_group(form: &VariantGroupForm) -> Result<VariantGroup, String> {
    http::post("/variant-groups", form).await
}

pub async fn delete_group(id: &str) -> Result<(), String> {
    http::delete(&format!("/variant-groups/{}", urlencoding::encode(id))).await
}
