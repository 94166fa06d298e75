use contracts::enums::OrderStatus;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub search_query: String,
    /// `None` is the "All" sentinel.
    pub status_filter: Option<OrderStatus>,
    /// 1-based.
    pub page: usize,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: None,
            page: 1,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
