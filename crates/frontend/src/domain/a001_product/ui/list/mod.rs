pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use contracts::domain::a001_product::aggregate::Product;

use self::state::{create_state, PAGE_SIZE};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::api_utils::asset_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    clamp_page, filter_items, get_sort_class, get_sort_indicator, page_slice, remove_by_key,
    replace_by_key, sort_list, total_pages, Keyed, Searchable, Sortable,
};
use crate::shared::money::format_inr;

impl Searchable for Product {
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .brand
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(needle)
            || self
                .category
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(needle)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => self
                .effective_price()
                .partial_cmp(&other.effective_price())
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            "category" => self
                .category
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.category.as_deref().unwrap_or("").to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    all_products.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load products: {e}")));
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

    // Search and the category filter compose in order over the cache; the
    // visible window is recomputed from scratch on every render.
    let filtered = move || {
        let s = state.get();
        let mut data = filter_items(&all_products.get(), &s.search_query);
        if let Some(cat) = &s.category_filter {
            data.retain(|p| p.category.as_deref() == Some(cat.as_str()));
        }
        sort_list(&mut data, &s.sort_field, s.sort_ascending);
        data
    };
    let page_count = move || total_pages(filtered().len(), PAGE_SIZE);
    let current_page = move || clamp_page(state.get().page, page_count());
    let visible = move || page_slice(&filtered(), current_page(), PAGE_SIZE);

    let category_options = move || {
        all_products
            .get()
            .iter()
            .filter_map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let open_create = move || {
        editing.set(None);
        set_show_details.set(true);
    };

    let open_edit = move |product: Product| {
        editing.set(Some(product));
        set_show_details.set(true);
    };

    let on_saved = Callback::new(move |product: Product| {
        all_products.update(|list| {
            if !replace_by_key(list, product.clone()) {
                list.insert(0, product);
            }
        });
        set_show_details.set(false);
    });

    let on_cancel = Callback::new(move |_: ()| set_show_details.set(false));

    let delete_product = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete product \"{name}\"?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    all_products.update(|list| {
                        remove_by_key(list, &id);
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to delete product: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Products"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        "New product"
                    </button>
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
                        placeholder="Search by name, brand or category"
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
                        state.update(|s| {
                            s.category_filter = if value == "all" { None } else { Some(value) };
                        });
                    }
                >
                    <option value="all">"All categories"</option>
                    {move || category_options().into_iter().map(|cat| view! {
                        <option value={cat.clone()}>{cat.clone()}</option>
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
                <div class="loading">"Loading products..."</div>
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Category"
                                <span class={move || get_sort_class(&state.get().sort_field, "category")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "category", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("price")>
                                "Price"
                                <span class={move || get_sort_class(&state.get().sort_field, "price")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "price", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stock")>
                                "Stock"
                                <span class={move || get_sort_class(&state.get().sort_field, "stock")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "stock", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">"Variant group"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|product| {
                            let product_for_edit = product.clone();
                            let id_for_delete = product.id.clone();
                            let name_for_delete = product.name.clone();
                            let image = product.image.clone();
                            let on_sale = product.sale_price > 0.0;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        {match image {
                                            Some(path) if !path.is_empty() => view! {
                                                <img src={asset_url(&path)} alt={product.name.clone()} class="table__thumb" />
                                            }.into_any(),
                                            _ => view! { <span>"-"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">
                                        <div>{product.name.clone()}</div>
                                        <div class="table__cell-sub">{product.brand.clone().unwrap_or_default()}</div>
                                    </td>
                                    <td class="table__cell">{product.category.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">
                                        {if on_sale {
                                            view! {
                                                <span>
                                                    <span class="price price--sale">{format_inr(product.sale_price)}</span>
                                                    <span class="price price--struck">{format_inr(product.price)}</span>
                                                </span>
                                            }.into_any()
                                        } else {
                                            view! { <span class="price">{format_inr(product.price)}</span> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell">
                                        <span class:stock--out={product.stock == 0}>{product.stock}</span>
                                    </td>
                                    <td class="table__cell">{product.variant_group.clone().filter(|g| !g.is_empty()).unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--secondary"
                                            title="Edit product"
                                            on:click=move |_| open_edit(product_for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--danger"
                                            title="Delete product"
                                            on:click=move |_| delete_product(id_for_delete.clone(), name_for_delete.clone())
                                        >
                                            {icon("delete")}
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

            <Show when=move || show_details.get()>
                <ProductDetails
                    product=editing.get_untracked()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
