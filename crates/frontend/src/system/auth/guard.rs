use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for an admin identity.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=|| view! { <div class="guard-message">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
