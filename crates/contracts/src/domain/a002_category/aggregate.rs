use serde::{Deserialize, Serialize};

use crate::enums::ColorTag;

/// Catalog category. Product counts are derived client-side from the
/// product cache and are deliberately not part of the wire type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub color: ColorTag,

    /// Emoji shown on the category card.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub color: ColorTag,
    pub icon: String,
}

impl CategoryForm {
    pub fn from_category(c: &Category) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            description: c.description.clone(),
            color: c.color,
            icon: c.icon.clone(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.name.trim().is_empty(), "Category name is required");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_color_defaults_to_first_theme() {
        let category: Category =
            serde_json::from_str(r#"{ "_id": "c1", "name": "Kitchen" }"#).unwrap();
        assert_eq!(category.color, ColorTag::Indigo);
        assert_eq!(category.icon, "");
    }

    #[test]
    fn test_color_wire_format() {
        let category: Category = serde_json::from_str(
            r#"{ "_id": "c1", "name": "Kitchen", "color": "emerald", "icon": "🍳" }"#,
        )
        .unwrap();
        assert_eq!(category.color, ColorTag::Emerald);
    }
}
