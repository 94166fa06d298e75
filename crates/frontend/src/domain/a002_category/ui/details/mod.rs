use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
use contracts::enums::ColorTag;

use crate::domain::a002_category::api;

#[component]
pub fn CategoryDetails(
    category: Option<Category>,
    on_saved: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(match &category {
        Some(c) => CategoryForm::from_category(c),
        None => CategoryForm::default(),
    });
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let title = if category.is_some() {
        "Edit category"
    } else {
        "New category"
    };

    let save = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_category(id, &current).await,
                None => api::create_category(&current).await,
            };
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="panel panel--details">
            <div class="panel__header">
                <h3>{title}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Color"</label>
                        <select
                            class="select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if let Some(color) = ColorTag::parse(&value) {
                                    form.update(|f| f.color = color);
                                }
                            }
                        >
                            {
                                let selected = form.get_untracked().color;
                                ColorTag::all().into_iter().map(|color| view! {
                                    <option value={color.display_name()} selected={color == selected}>
                                        {color.display_name()}
                                    </option>
                                }).collect_view()
                            }
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Icon (emoji)"</label>
                        <input
                            type="text"
                            class="input input--short"
                            prop:value=move || form.get().icon
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.icon = value);
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="panel__actions">
                <button class="button button--primary" on:click=move |_| save()>"Save"</button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
