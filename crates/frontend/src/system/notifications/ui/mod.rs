use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::system::notifications::Notification;

use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{replace_by_key, Keyed};
use crate::system::notifications::api;

const POLL_INTERVAL_MS: u32 = 30_000;

impl Keyed for Notification {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Notification bell with a drop-down panel. Polls the backend every 30
/// seconds from mount to unmount; a failed poll is logged and retried at
/// the next tick.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let items: RwSignal<Vec<Notification>> = RwSignal::new(Vec::new());
    let (open, set_open) = signal(false);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    Effect::new({
        let alive = alive.clone();
        move |started: Option<()>| {
            if started.is_some() {
                return;
            }
            let alive = alive.clone();
            spawn_local(async move {
                loop {
                    match api::fetch_notifications().await {
                        Ok(data) => {
                            // The component may have unmounted while the
                            // request was in flight; drop the result then.
                            if items.try_set(data).is_some() {
                                break;
                            }
                        }
                        Err(e) => log::warn!("Notification poll failed: {e}"),
                    }
                    TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                }
            });
        }
    });

    let unread_count = move || items.get().iter().filter(|n| n.unread).count();

    let mark_read = move |id: String| {
        spawn_local(async move {
            match api::mark_read(&id).await {
                Ok(updated) => {
                    items.update(|list| {
                        replace_by_key(list, updated);
                    });
                }
                Err(e) => log::warn!("Failed to mark notification read: {e}"),
            }
        });
    };

    let clear_all = move || {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Clear all notifications?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::clear_all().await {
                Ok(()) => items.set(Vec::new()),
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ =
                            win.alert_with_message(&format!("Failed to clear notifications: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="notifications">
            <button class="notifications__bell" on:click=move |_| set_open.update(|o| *o = !*o)>
                {icon("bell")}
                <Show when=move || (unread_count() > 0)>
                    <span class="notifications__badge">{unread_count}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="notifications__panel">
                    <div class="notifications__panel-header">
                        <h3>"Notifications"</h3>
                        <button
                            class="button button--secondary"
                            on:click=move |_| clear_all()
                            disabled=move || items.get().is_empty()
                        >
                            "Clear all"
                        </button>
                    </div>
                    <div class="notifications__list">
                        {move || {
                            let list = items.get();
                            if list.is_empty() {
                                view! { <div class="notifications__empty">"No notifications"</div> }.into_any()
                            } else {
                                list.into_iter().map(|n| {
                                    let id = n.id.clone();
                                    let unread = n.unread;
                                    view! {
                                        <div
                                            class="notifications__item"
                                            class:notifications__item--unread={unread}
                                            on:click=move |_| {
                                                if unread {
                                                    mark_read(id.clone());
                                                }
                                            }
                                        >
                                            <div class="notifications__message">{n.message.clone()}</div>
                                            <div class="notifications__time">
                                                {format_optional_datetime(n.created_at.as_ref())}
                                            </div>
                                        </div>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
