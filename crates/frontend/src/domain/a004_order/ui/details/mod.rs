use leptos::prelude::*;

use contracts::domain::a004_order::aggregate::Order;

use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::invoice::template::InvoiceTotals;
use crate::shared::invoice::{print_invoice, PaperProfile};
use crate::shared::money::{format_inr, format_shipping};

/// Read-only order view with the invoice print controls. The paper
/// profile selection is local to this panel and resets with it.
#[component]
pub fn OrderDetails(order: Order, on_close: Callback<()>) -> impl IntoView {
    let profile: RwSignal<PaperProfile> = RwSignal::new(PaperProfile::A4);
    let totals = InvoiceTotals::from_order(&order);
    let order_for_print = order.clone();

    let print = move |_| {
        if let Err(e) = print_invoice(&order_for_print, profile.get_untracked()) {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&e);
            }
        }
    };

    view! {
        <div class="panel panel--details">
            <div class="panel__header">
                <h3>{format!("Order {}", order.id)}</h3>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>

            <div class="order-details__meta">
                <div>{format!("Placed: {}", format_optional_datetime(order.created_at.as_ref()))}</div>
                <div>{format!("Status: {}", order.status.display_name())}</div>
            </div>

            <div class="order-details__customer">
                <strong>"Customer"</strong>
                <div>{order.customer_details.name.clone()}</div>
                <div>{order.customer_details.email.clone()}</div>
                <div>{order.customer_details.phone.clone()}</div>
                <div>{order.customer_details.address.clone()}</div>
            </div>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Item"</th>
                        <th class="table__header-cell">"Qty"</th>
                        <th class="table__header-cell">"Unit price"</th>
                        <th class="table__header-cell">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {order.ordered_items.iter().map(|item| view! {
                        <tr class="table__row">
                            <td class="table__cell">{item.item_name.clone()}</td>
                            <td class="table__cell">{item.quantity}</td>
                            <td class="table__cell">{format_inr(item.unit_price)}</td>
                            <td class="table__cell">{format_inr(item.line_total())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            <div class="order-details__totals">
                <div>{format!("Subtotal: {}", format_inr(totals.subtotal))}</div>
                <div>{format!("GST (18%): {}", format_inr(totals.tax))}</div>
                <div>{format!("Shipping: {}", format_shipping(totals.shipping))}</div>
                <div class="order-details__grand">{format!("Grand total: {}", format_inr(totals.total))}</div>
            </div>

            <div class="panel__actions">
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(parsed) = PaperProfile::parse(&value) {
                            profile.set(parsed);
                        }
                    }
                >
                    {PaperProfile::all().into_iter().map(|p| view! {
                        <option value={p.code()} selected={p == PaperProfile::A4}>
                            {p.display_name()}
                        </option>
                    }).collect_view()}
                </select>
                <button class="button button--primary" on:click=print>
                    {icon("print")}
                    "Print invoice"
                </button>
            </div>
        </div>
    }
}
