use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a004_order::aggregate::Order;
use contracts::system::users::User;

use crate::domain::a001_product::api as products_api;
use crate::domain::a004_order::api as orders_api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::money::format_inr;
use crate::system::users::api as users_api;

/// Overview summary: three resources fetched independently. A failed
/// fetch logs and leaves its card at the empty default — the others still
/// populate.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());

    Effect::new(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        spawn_local(async move {
            match products_api::fetch_products().await {
                Ok(data) => products.set(data),
                Err(e) => log::warn!("Overview: products fetch failed: {e}"),
            }
        });
        spawn_local(async move {
            match orders_api::fetch_orders().await {
                Ok(data) => orders.set(data),
                Err(e) => log::warn!("Overview: orders fetch failed: {e}"),
            }
        });
        spawn_local(async move {
            match users_api::fetch_users().await {
                Ok(data) => users.set(data),
                Err(e) => log::warn!("Overview: users fetch failed: {e}"),
            }
        });
    });

    let revenue = move || {
        orders
            .get()
            .iter()
            .map(|o| o.payment_summary.total)
            .sum::<f64>()
    };
    let out_of_stock = move || products.get().iter().filter(|p| p.stock == 0).count();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Overview"</h2>
            </div>

            <div class="stat-grid">
                <StatCard
                    title="Products"
                    icon_name="products"
                    value=Signal::derive(move || products.get().len().to_string())
                />
                <StatCard
                    title="Orders"
                    icon_name="orders"
                    value=Signal::derive(move || orders.get().len().to_string())
                />
                <StatCard
                    title="Revenue"
                    icon_name="dashboard"
                    value=Signal::derive(move || format_inr(revenue()))
                />
                <StatCard
                    title="Customers"
                    icon_name="customers"
                    value=Signal::derive(move || users.get().len().to_string())
                />
            </div>

            <Show when=move || (out_of_stock() > 0)>
                <div class="notice">
                    {move || format!("{} product(s) out of stock", out_of_stock())}
                </div>
            </Show>
        </div>
    }
}
