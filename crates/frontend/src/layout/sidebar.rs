use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar(current_page: RwSignal<Page>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Eleckyo"</div>
            <ul class="sidebar__nav">
                {Page::all().into_iter().map(|page| {
                    let is_active = move || current_page.get() == page;
                    view! {
                        <li>
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active={is_active}
                                on:click=move |_| current_page.set(page)
                            >
                                {icon(page.icon_name())}
                                <span>{page.label()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
