use serde::{Deserialize, Serialize};

/// Named collection of products treated as variants of one another.
/// Products reference a group by its unique name, not its id, and no
/// rename operation exists — the name is effectively immutable once the
/// group is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGroup {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGroupForm {
    pub name: String,
    pub description: String,
}

impl VariantGroupForm {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.name.trim().is_empty(), "Group name is required");
        Ok(())
    }
}
