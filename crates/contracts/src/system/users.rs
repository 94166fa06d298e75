use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Storefront account as seen by the dashboard. Admins cannot create
/// accounts, only inspect, re-role and delete them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for the role control on the users page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetUserRole {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_role_defaults_to_customer() {
        let user: User =
            serde_json::from_str(r#"{ "_id": "u1", "name": "Asha", "email": "a@b.in" }"#)
                .unwrap();
        assert_eq!(user.role, UserRole::Customer);
    }
}
