use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a005_settings::aggregate::StoreSettings;

use crate::domain::a005_settings::api;
use crate::shared::icons::icon;

/// Settings form for the store metadata and the promotional banner/offer
/// content shown on the storefront.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let form: RwSignal<StoreSettings> = RwSignal::new(StoreSettings::default());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved_flash, set_saved_flash) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(settings) => {
                    form.set(settings);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load settings: {e}")));
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

    let save = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_settings(&current).await {
                Ok(saved) => {
                    form.set(saved);
                    set_saving.set(false);
                    set_saved_flash.set(true);
                    TimeoutFuture::new(2000).await;
                    let _ = set_saved_flash.try_set(false);
                }
                Err(e) => {
                    set_saving.set(false);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let text_field = move |label: &'static str,
                          get: fn(&StoreSettings) -> &String,
                          set: fn(&mut StoreSettings, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    class="input"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Settings"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load_data()>
                        {icon("refresh")}
                        "Reload"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error">
                    {e}
                    <button class="button button--secondary" on:click=move |_| load_data()>"Retry"</button>
                </div>
            })}

            <Show when=move || saved_flash.get()>
                <div class="success">"Settings saved"</div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading settings..."</div>
            </Show>

            <div class="form form--settings">
                <h3>"Store"</h3>
                {text_field("Store name", |f| &f.store_name, |f, v| f.store_name = v)}
                {text_field("Contact email", |f| &f.contact_email, |f, v| f.contact_email = v)}
                {text_field("Contact phone", |f| &f.contact_phone, |f, v| f.contact_phone = v)}
                {text_field("Address", |f| &f.address, |f, v| f.address = v)}

                <h3>"Banner"</h3>
                {text_field("Banner title", |f| &f.banner_title, |f, v| f.banner_title = v)}
                {text_field("Banner subtitle", |f| &f.banner_subtitle, |f, v| f.banner_subtitle = v)}
                {text_field("Banner image URL", |f| &f.banner_image, |f, v| f.banner_image = v)}

                <h3>"Offer"</h3>
                {text_field("Offer title", |f| &f.offer_title, |f, v| f.offer_title = v)}
                {text_field("Offer subtitle", |f| &f.offer_subtitle, |f, v| f.offer_subtitle = v)}
                {text_field("Offer image URL", |f| &f.offer_image, |f, v| f.offer_image = v)}
                {text_field("Offer link", |f| &f.offer_link, |f, v| f.offer_link = v)}
            </div>

            <div class="panel__actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=move |_| save()
                >
                    {move || if saving.get() { "Saving..." } else { "Save settings" }}
                </button>
            </div>
        </div>
    }
}
