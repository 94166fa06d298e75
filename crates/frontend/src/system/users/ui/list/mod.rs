pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use contracts::enums::UserRole;
use contracts::system::users::User;

use self::state::create_state;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_items, get_sort_class, get_sort_indicator, remove_by_key, replace_by_key, sort_list,
    Keyed, Searchable, Sortable,
};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

impl Searchable for User {
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "role" => self
                .role
                .display_name()
                .cmp(other.role.display_name()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load users: {e}")));
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

    let visible_users = move || {
        let s = state.get();
        let mut data = filter_items(&all_users.get(), &s.search_query);
        if let Some(role) = s.role_filter {
            data.retain(|u| u.role == role);
        }
        sort_list(&mut data, &s.sort_field, s.sort_ascending);
        data
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

    let change_role = move |id: String, raw: String| {
        let Some(role) = UserRole::parse(&raw) else {
            return;
        };
        spawn_local(async move {
            match api::set_role(&id, role).await {
                Ok(updated) => {
                    all_users.update(|users| {
                        replace_by_key(users, updated);
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to update role: {e}"));
                    }
                }
            }
        });
    };

    let delete_user = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete user \"{name}\"?"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => {
                    all_users.update(|users| {
                        remove_by_key(users, &id);
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Failed to delete user: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Users"</h2>
                <div class="header__actions">
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
                        placeholder="Search by name or email"
                        prop:value=move || state.get().search_query.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.search_query = value);
                        }
                    />
                </div>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.role_filter = UserRole::parse(&value));
                    }
                >
                    <option value="all">"All roles"</option>
                    {UserRole::all().into_iter().map(|role| view! {
                        <option value={role.display_name().to_lowercase()}>{role.display_name()}</option>
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
                <div class="loading">"Loading users..."</div>
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "name")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "name", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("email")>
                                "Email"
                                <span class={move || get_sort_class(&state.get().sort_field, "email")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "email", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Joined"
                                <span class={move || get_sort_class(&state.get().sort_field, "created_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "created_at", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_users().into_iter().map(|user| {
                            let id_for_role = user.id.clone();
                            let id_for_delete = user.id.clone();
                            let name_for_delete = user.name.clone();
                            let role = user.role;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{user.name.clone()}</td>
                                    <td class="table__cell">{user.email.clone()}</td>
                                    <td class="table__cell">{user.address.clone()}</td>
                                    <td class="table__cell">{format_optional_datetime(user.created_at.as_ref())}</td>
                                    <td class="table__cell">
                                        <select
                                            class="select select--inline"
                                            on:change=move |ev| change_role(id_for_role.clone(), event_target_value(&ev))
                                        >
                                            {UserRole::all().into_iter().map(|r| view! {
                                                <option
                                                    value={r.display_name().to_lowercase()}
                                                    selected={r == role}
                                                >
                                                    {r.display_name()}
                                                </option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--danger"
                                            title="Delete user"
                                            on:click=move |_| delete_user(id_for_delete.clone(), name_for_delete.clone())
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
        </div>
    }
}
