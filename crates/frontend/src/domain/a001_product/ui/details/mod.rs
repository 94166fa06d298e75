pub mod view_model;

use leptos::prelude::*;

use contracts::domain::a001_product::aggregate::Product;

use self::view_model::ProductDetailsViewModel;

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<Product>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product.as_ref());
    let form = vm.form;
    let title = if vm.is_edit_mode() {
        "Edit product"
    } else {
        "New product"
    };

    view! {
        <div class="panel panel--details">
            <div class="panel__header">
                <h3>{title}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

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
                <div class="form-row">
                    <div class="form-group">
                        <label>"Price (₹)"</label>
                        <input
                            type="number"
                            class="input"
                            prop:value=move || form.get().price.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.price = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Sale price (₹)"</label>
                        <input
                            type="number"
                            class="input"
                            prop:value=move || form.get().sale_price.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.sale_price = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Stock"</label>
                        <input
                            type="number"
                            class="input"
                            prop:value=move || form.get().stock.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.stock = value);
                            }
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Category"</label>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || form.get().category.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.category = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Brand"</label>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || form.get().brand.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.brand = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Model"</label>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || form.get().model.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.model = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Color"</label>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || form.get().color.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.color = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Warranty"</label>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || form.get().warranty.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.warranty = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label>"Image URL"</label>
                    <input
                        type="text"
                        class="input"
                        prop:value=move || form.get().image.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.image = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        class="input input--textarea"
                        prop:value=move || form.get().description.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.description = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    ></textarea>
                </div>
            </div>

            <div class="panel__actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
