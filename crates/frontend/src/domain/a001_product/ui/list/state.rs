use leptos::prelude::*;

pub const PAGE_SIZE: usize = 6;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub search_query: String,
    /// `None` is the "All" sentinel.
    pub category_filter: Option<String>,
    /// 1-based.
    pub page: usize,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category_filter: None,
            page: 1,
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
