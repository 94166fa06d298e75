pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a004_order::aggregate::Order;
use contracts::enums::OrderStatus;

use self::state::{create_state, PAGE_SIZE};
use crate::domain::a004_order::api;
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    clamp_page, filter_items, page_slice, replace_by_key, total_pages, Keyed, Searchable,
};
use crate::shared::money::format_inr;

impl Searchable for Order {
    fn matches_search(&self, needle: &str) -> bool {
        self.customer_details.name.to_lowercase().contains(needle)
            || self.customer_details.email.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let all_orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let viewing: RwSignal<Option<Order>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(data) => {
                    all_orders.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load orders: {e}")));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            load_data();
        }
    });

    let filtered = move || {
        let s = state.get();
        let mut data = filter_items(&all_orders.get(), &s.search_query);
        if let Some(status) = s.status_filter {
            data.retain(|o| o.status == status);
        }
        data
    };
    let page_count = move || total_pages(filtered().len(), PAGE_SIZE);
    let current_page = move || clamp_page(state.get().page, page_count());
    let visible = move || page_slice(&filtered(), current_page(), PAGE_SIZE);

    let change_status = move |id: String, raw: String| {
        let Some(status) = OrderStatus::parse(&raw) else {
            return;
        };
        spawn_local(async move {
            match api::set_status(&id, status).await {
                Ok(updated) => {
                    all_orders.update(|list| {
                        replace_by_key(list, updated.clone());
                    });
                    // Keep an open details panel in sync.
                    viewing.update(|v| {
                        if v.as_ref().is_some_and(|o| o.id == updated.id) {
                            *v = Some(updated);
                        }
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to update status: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Orders"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load_data()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="toolbar">
                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="input"
                        placeholder="Search by customer, email or order id"
                        prop:value=move || state.get().search_query.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            // Changing the search text jumps back to page 1.
                            state.update(|s| {
                                s.search_query = value;
                                s.page = 1;
                            });
                        }
                    />
                </div>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.status_filter = OrderStatus::parse(&value));
                    }
                >
                    <option value="all">"All statuses"</option>
                    {OrderStatus::all().into_iter().map(|status| view! {
                        <option value={status.display_name()}>{status.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error">
                    {e}
                    <button class="button button--secondary" on:click=move |_| load_data()>"Retry"</button>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Loading orders..."</div>
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Order"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Items"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|order| {
                            let id_for_status = order.id.clone();
                            let order_for_view = order.clone();
                            let status = order.status;
                            let item_count: u32 = order.ordered_items.iter().map(|i| i.quantity).sum();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{order.id.clone()}</td>
                                    <td class="table__cell">{format_optional_datetime(order.created_at.as_ref())}</td>
                                    <td class="table__cell">
                                        <div>{order.customer_details.name.clone()}</div>
                                        <div class="table__cell-sub">{order.customer_details.email.clone()}</div>
                                    </td>
                                    <td class="table__cell">{item_count}</td>
                                    <td class="table__cell">{format_inr(order.payment_summary.total)}</td>
                                    <td class="table__cell">
                                        <select
                                            class={format!("select select--inline {}", status.css_class())}
                                            on:change=move |ev| change_status(id_for_status.clone(), event_target_value(&ev))
                                        >
                                            {OrderStatus::all().into_iter().map(|s| view! {
                                                <option value={s.display_name()} selected={s == status}>
                                                    {s.display_name()}
                                                </option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary"
                                            title="Order details"
                                            on:click=move |_| viewing.set(Some(order_for_view.clone()))
                                        >
                                            {icon("edit")}
                                            "View"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(current_page)
                total_pages=Signal::derive(page_count)
                total_count=Signal::derive(move || filtered().len())
                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
            />

            {move || viewing.get().map(|order| view! {
                <OrderDetails
                    order=order
                    on_close=Callback::new(move |_: ()| viewing.set(None))
                />
            })}
        </div>
    }
}
