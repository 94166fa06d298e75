use contracts::system::users::User;
use web_sys::window;

const TOKEN_KEY: &str = "eleckyo_token";
const IDENTITY_KEY: &str = "eleckyo_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session written at successful login.
pub fn save_session(token: &str, user: &User) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(IDENTITY_KEY, &serialized);
        }
    }
}

/// Get the opaque bearer token, if a session is persisted.
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the persisted identity record. Garbage in storage reads as absent.
pub fn get_identity() -> Option<User> {
    let raw = get_local_storage()?.get_item(IDENTITY_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear token and identity together (logout or unauthorized response).
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}
