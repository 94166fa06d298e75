use serde::{Deserialize, Serialize};

/// Singleton store configuration: contact metadata plus the promotional
/// banner and offer blocks edited on the settings page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub store_name: String,

    #[serde(default)]
    pub contact_email: String,

    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub banner_title: String,

    #[serde(default)]
    pub banner_subtitle: String,

    #[serde(default)]
    pub banner_image: String,

    #[serde(default)]
    pub offer_title: String,

    #[serde(default)]
    pub offer_subtitle: String,

    #[serde(default)]
    pub offer_image: String,

    #[serde(default)]
    pub offer_link: String,
}

impl StoreSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.store_name.trim().is_empty(), "Store name is required");
        if !self.contact_email.trim().is_empty() {
            anyhow::ensure!(
                self.contact_email.contains('@'),
                "Contact email must be a valid address"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_decodes_to_blanks() {
        let settings: StoreSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.store_name, "");
        assert!(settings.id.is_none());
    }

    #[test]
    fn test_validation() {
        let mut settings = StoreSettings {
            store_name: "Eleckyo".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        settings.contact_email = "not-an-email".to_string();
        assert!(settings.validate().is_err());
        settings.contact_email = "care@eleckyo.in".to_string();
        assert!(settings.validate().is_ok());
        settings.store_name.clear();
        assert!(settings.validate().is_err());
    }
}
