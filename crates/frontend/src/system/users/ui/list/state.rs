use contracts::enums::UserRole;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub search_query: String,
    /// `None` is the "All" sentinel.
    pub role_filter: Option<UserRole>,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            role_filter: None,
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}
