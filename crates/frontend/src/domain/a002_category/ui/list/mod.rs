use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::Category;

use crate::domain::a001_product::api as products_api;
use crate::domain::a002_category::api;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_items, remove_by_key, replace_by_key, Keyed, Searchable};

impl Searchable for Category {
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Count products per category name from the product cache. Categories the
/// product list does not mention count as zero.
fn product_counts(products: &[Product]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for product in products {
        if let Some(category) = product.category.as_deref() {
            if !category.is_empty() {
                *counts.entry(category.to_string()).or_default() += 1;
            }
        }
    }
    counts
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    // Product cache for the derived per-category counts. Fetched
    // independently of the categories; a failure here only zeroes the
    // counts, the page itself stays usable.
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search_query, set_search_query) = signal(String::new());
    let (show_details, set_show_details) = signal(false);
    let editing: RwSignal<Option<Category>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(data) => {
                    categories.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load categories: {e}")));
                    set_loading.set(false);
                }
            }
        });
        spawn_local(async move {
            match products_api::fetch_products().await {
                Ok(data) => products.set(data),
                Err(e) => log::warn!("Failed to load products for category counts: {e}"),
            }
        });
    };

    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            load_data();
        }
    });

    let visible = move || filter_items(&categories.get(), &search_query.get());
    let counts = move || product_counts(&products.get());

    let open_create = move || {
        editing.set(None);
        set_show_details.set(true);
    };

    let open_edit = move |category: Category| {
        editing.set(Some(category));
        set_show_details.set(true);
    };

    let on_saved = Callback::new(move |category: Category| {
        categories.update(|list| {
            if !replace_by_key(list, category.clone()) {
                list.insert(0, category);
            }
        });
        set_show_details.set(false);
    });

    let on_cancel = Callback::new(move |_: ()| set_show_details.set(false));

    let delete_category = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete category \"{name}\"?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_category(&id).await {
                Ok(()) => {
                    categories.update(|list| {
                        remove_by_key(list, &id);
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to delete category: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Categories"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        "New category"
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
                        placeholder="Search categories"
                        prop:value=move || search_query.get()
                        on:input=move |ev| set_search_query.set(event_target_value(&ev))
                    />
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error">
                    {e}
                    <button class="button button--secondary" on:click=move |_| load_data()>"Retry"</button>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Loading categories..."</div>
            </Show>

            <div class="card-grid">
                {move || {
                    let count_map = counts();
                    visible().into_iter().map(|category| {
                        let count = count_map.get(&category.name).copied().unwrap_or(0);
                        let category_for_edit = category.clone();
                        let id_for_delete = category.id.clone();
                        let name_for_delete = category.name.clone();
                        view! {
                            <div class={format!("card category-card {}", category.color.css_class())}>
                                <div class="category-card__icon">{category.icon.clone()}</div>
                                <div class="category-card__body">
                                    <h3>{category.name.clone()}</h3>
                                    <p>{category.description.clone()}</p>
                                    <span class="category-card__count">
                                        {format!("{count} product{}", if count == 1 { "" } else { "s" })}
                                    </span>
                                </div>
                                <div class="category-card__actions">
                                    <button
                                        class="button button--secondary"
                                        title="Edit category"
                                        on:click=move |_| open_edit(category_for_edit.clone())
                                    >
                                        {icon("edit")}
                                    </button>
                                    <button
                                        class="button button--danger"
                                        title="Delete category"
                                        on:click=move |_| delete_category(id_for_delete.clone(), name_for_delete.clone())
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <Show when=move || show_details.get()>
                <CategoryDetails
                    category=editing.get_untracked()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: Option<&str>) -> Product {
        serde_json::from_str(&format!(
            r#"{{ "_id": "{id}", "name": "p", "category": {} }}"#,
            match category {
                Some(c) => format!("\"{c}\""),
                None => "null".to_string(),
            }
        ))
        .unwrap()
    }

    #[test]
    fn test_product_counts_group_by_name() {
        let products = vec![
            product("1", Some("Kitchen")),
            product("2", Some("Kitchen")),
            product("3", Some("Audio")),
            product("4", None),
            product("5", Some("")),
        ];
        let counts = product_counts(&products);
        assert_eq!(counts.get("Kitchen"), Some(&2));
        assert_eq!(counts.get("Audio"), Some(&1));
        assert_eq!(counts.len(), 2, "uncategorized products are not counted");
    }
}
