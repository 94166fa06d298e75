use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a003_variant_group::aggregate::{VariantGroup, VariantGroupForm};

use crate::domain::a001_product::api as products_api;
use crate::domain::a003_variant_group::api;
use crate::domain::a003_variant_group::membership::{can_link, clear_group_references, partition_members};
use crate::shared::icons::icon;
use crate::shared::list_utils::{remove_by_key, replace_by_key, Keyed};
use crate::shared::money::format_inr;

impl Keyed for VariantGroup {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Two-pane variant grouping view: groups on the left, membership of the
/// selected group against all other products on the right. Link state
/// lives on the product documents; both caches are patched in place after
/// each confirmed mutation.
#[component]
pub fn VariantGroupsPage() -> impl IntoView {
    let groups: RwSignal<Vec<VariantGroup>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let selected: RwSignal<Option<VariantGroup>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (new_group_name, set_new_group_name) = signal(String::new());
    let (new_group_description, set_new_group_description) = signal(String::new());

    let load_data = move || {
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_groups().await {
                Ok(data) => groups.set(data),
                Err(e) => set_error.set(Some(format!("Failed to load variant groups: {e}"))),
            }
        });
        spawn_local(async move {
            match products_api::fetch_products().await {
                Ok(data) => products.set(data),
                Err(e) => log::warn!("Failed to load products for grouping: {e}"),
            }
        });
    };

    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            load_data();
        }
    });

    let create_group = move || {
        let form = VariantGroupForm {
            name: new_group_name.get_untracked().trim().to_string(),
            description: new_group_description.get_untracked().trim().to_string(),
        };
        if let Err(e) = form.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        spawn_local(async move {
            match api::create_group(&form).await {
                Ok(group) => {
                    groups.update(|list| list.insert(0, group));
                    set_new_group_name.set(String::new());
                    set_new_group_description.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_group = move |group: VariantGroup| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Delete group \"{}\"? Products keep their data but leave the group.",
                    group.name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_group(&group.id).await {
                Ok(()) => {
                    groups.update(|list| {
                        remove_by_key(list, &group.id);
                    });
                    // Local-only cascade over the product cache; see the
                    // membership module.
                    products.update(|list| {
                        clear_group_references(list, &group.name);
                    });
                    selected.update(|s| {
                        if s.as_ref().is_some_and(|g| g.id == group.id) {
                            *s = None;
                        }
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to delete group: {e}"));
                    }
                }
            }
        });
    };

    let relink = move |product_id: String, group_name: String| {
        spawn_local(async move {
            match products_api::set_variant_group(&product_id, &group_name).await {
                Ok(updated) => {
                    products.update(|list| {
                        replace_by_key(list, updated);
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to update product: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Variant groups"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load_data()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="split-view">
                <div class="split-view__left">
                    <div class="panel">
                        <h3>"New group"</h3>
                        <input
                            type="text"
                            class="input"
                            placeholder="Group name"
                            prop:value=move || new_group_name.get()
                            on:input=move |ev| set_new_group_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            class="input"
                            placeholder="Description"
                            prop:value=move || new_group_description.get()
                            on:input=move |ev| set_new_group_description.set(event_target_value(&ev))
                        />
                        <button class="button button--primary" on:click=move |_| create_group()>
                            {icon("plus")}
                            "Create"
                        </button>
                    </div>

                    <div class="group-list">
                        {move || groups.get().into_iter().map(|group| {
                            let group_for_select = group.clone();
                            let group_for_delete = group.clone();
                            let is_selected = move || {
                                selected.get().as_ref().is_some_and(|g| g.id == group_for_select.id)
                            };
                            let group_for_click = group.clone();
                            view! {
                                <div
                                    class="group-list__item"
                                    class:group-list__item--selected={is_selected}
                                    on:click=move |_| selected.set(Some(group_for_click.clone()))
                                >
                                    <div class="group-list__name">{group.name.clone()}</div>
                                    <div class="group-list__description">{group.description.clone()}</div>
                                    <button
                                        class="button button--danger"
                                        title="Delete group"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            delete_group(group_for_delete.clone());
                                        }
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="split-view__right">
                    {move || match selected.get() {
                        None => view! {
                            <div class="placeholder">"Select a group to manage its variants"</div>
                        }.into_any(),
                        Some(group) => {
                            let (members, others) = partition_members(&products.get(), &group.name);
                            let group_name = group.name.clone();
                            let group_name_for_add = group.name.clone();
                            view! {
                                <div class="membership">
                                    <h3>{format!("Variants of \"{group_name}\"")}</h3>
                                    <div class="membership__members">
                                        {members.into_iter().map(|p| {
                                            let id = p.id.clone();
                                            view! {
                                                <div class="membership__row">
                                                    <span>{p.name.clone()}</span>
                                                    <span class="membership__price">{format_inr(p.effective_price())}</span>
                                                    <button
                                                        class="button button--secondary"
                                                        title="Remove from group"
                                                        on:click=move |_| relink(id.clone(), String::new())
                                                    >
                                                        {icon("close")}
                                                        "Remove"
                                                    </button>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>

                                    <h4>"Other products"</h4>
                                    <div class="membership__candidates">
                                        {others.into_iter().map(|p| {
                                            let id = p.id.clone();
                                            let target = group_name_for_add.clone();
                                            // Linked elsewhere: visible but not addable.
                                            let eligible = can_link(&p, &target);
                                            let current_group = p.variant_group.clone().filter(|g| !g.is_empty());
                                            view! {
                                                <div class="membership__row">
                                                    <span>{p.name.clone()}</span>
                                                    {current_group.map(|g| view! {
                                                        <span class="membership__tag">{g}</span>
                                                    })}
                                                    <button
                                                        class="button button--primary"
                                                        title="Add to group"
                                                        disabled={!eligible}
                                                        on:click=move |_| relink(id.clone(), target.clone())
                                                    >
                                                        {icon("link")}
                                                        "Add"
                                                    </button>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
