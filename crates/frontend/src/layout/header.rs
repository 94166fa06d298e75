use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::notifications::ui::NotificationBell;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user
            .map(|u| u.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Admin".to_string())
    };

    view! {
        <header class="app-header">
            <div class="app-header__spacer"></div>
            <div class="app-header__actions">
                <NotificationBell />
                <span class="app-header__user">{user_label}</span>
                <button class="button button--secondary" title="Log out" on:click=move |_| do_logout()>
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
