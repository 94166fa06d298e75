//! Users resource service. The dashboard cannot create accounts; it only
//! lists, re-roles and deletes them.

use contracts::enums::UserRole;
use contracts::system::users::{SetUserRole, User};

use crate::shared::http;

pub async fn fetch_users() -> Result<Vec<User>, String> {
    http::get("/users").await
}

pub async fn set_role(id: &str, role: UserRole) -> Result<User, String> {
    http::put(
        &format!("/users/{}/role", urlencoding::encode(id)),
        &SetUserRole { role },
    )
    .await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    http::delete(&format!("/users/{}", urlencoding::encode(id))).await
}
