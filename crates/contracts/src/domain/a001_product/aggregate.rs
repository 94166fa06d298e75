use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product as the backend returns it. Ids are backend-owned opaque
/// strings; every field the backend may omit decodes to a default so a
/// sparse document never fails the whole list fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// List price in rupees.
    #[serde(default)]
    pub price: f64,

    /// Discounted price. Zero means no sale. Not validated against the
    /// list price client-side.
    #[serde(default)]
    pub sale_price: f64,

    #[serde(default)]
    pub stock: u32,

    /// Free-form category name, matched against `Category::name`.
    #[serde(default)]
    pub category: Option<String>,

    /// Variant-group membership by group *name*, not id. Empty or absent
    /// means ungrouped.
    #[serde(default)]
    pub variant_group: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub sub_images: Vec<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub warranty: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price the storefront actually charges.
    pub fn effective_price(&self) -> f64 {
        if self.sale_price > 0.0 {
            self.sale_price
        } else {
            self.price
        }
    }

    /// Name-equality membership test. Empty group names never match.
    pub fn in_group(&self, group_name: &str) -> bool {
        !group_name.is_empty() && self.variant_group.as_deref() == Some(group_name)
    }

    pub fn is_grouped(&self) -> bool {
        self.variant_group.as_deref().is_some_and(|g| !g.is_empty())
    }
}

/// Form payload for create/update. `id` is `None` for create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub sale_price: f64,
    pub stock: u32,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub warranty: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sub_images: Vec<String>,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            price: p.price,
            sale_price: p.sale_price,
            stock: p.stock,
            category: p.category.clone(),
            brand: p.brand.clone(),
            model: p.model.clone(),
            color: p.color.clone(),
            warranty: p.warranty.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            sub_images: p.sub_images.clone(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.name.trim().is_empty(), "Product name is required");
        anyhow::ensure!(self.price > 0.0, "Price must be greater than zero");
        anyhow::ensure!(self.sale_price >= 0.0, "Sale price cannot be negative");
        Ok(())
    }
}

/// Payload for relinking a product to a variant group. An empty string
/// clears the membership on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetVariantGroup {
    pub variant_group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_document_decodes_with_defaults() {
        let product: Product =
            serde_json::from_str(r#"{ "_id": "p1", "name": "Mixer" }"#).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(product.variant_group.is_none());
        assert!(product.sub_images.is_empty());
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_effective_price_prefers_sale_price() {
        let mut product: Product =
            serde_json::from_str(r#"{ "_id": "p1", "price": 999.0 }"#).unwrap();
        assert_eq!(product.effective_price(), 999.0);
        product.sale_price = 799.0;
        assert_eq!(product.effective_price(), 799.0);
    }

    #[test]
    fn test_group_membership_by_name() {
        let product: Product = serde_json::from_str(
            r#"{ "_id": "p1", "variantGroup": "Mixer Grinders" }"#,
        )
        .unwrap();
        assert!(product.in_group("Mixer Grinders"));
        assert!(!product.in_group("Toasters"));
        assert!(!product.in_group(""));
        assert!(product.is_grouped());
    }

    #[test]
    fn test_empty_group_name_means_ungrouped() {
        let product: Product =
            serde_json::from_str(r#"{ "_id": "p1", "variantGroup": "" }"#).unwrap();
        assert!(!product.is_grouped());
        assert!(!product.in_group(""));
    }

    #[test]
    fn test_form_validation() {
        let mut form = ProductForm {
            name: "Kettle".to_string(),
            price: 1499.0,
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.name = "  ".to_string();
        assert!(form.validate().is_err());
        form.name = "Kettle".to_string();
        form.price = 0.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_create_form_omits_id_on_wire() {
        let form = ProductForm {
            name: "Kettle".to_string(),
            price: 1499.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"salePrice\""));
    }
}
