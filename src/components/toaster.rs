//! Toast Notifications
//!
//! Renders the notifier's entries and auto-dismisses each one after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::{use_notifier, Variant};

const DISMISS_AFTER_MS: u32 = 5_000;

#[component]
pub fn Toaster() -> impl IntoView {
    let notify = use_notifier();
    let entries = notify.entries();

    // Ids below this watermark already have a dismissal scheduled.
    let (scheduled, set_scheduled) = signal(0u64);

    Effect::new(move |_| {
        let pending: Vec<u64> = entries
            .get()
            .iter()
            .map(|entry| entry.id)
            .filter(|id| *id >= scheduled.get_untracked())
            .collect();
        if let Some(max) = pending.iter().max().copied() {
            set_scheduled.set(max + 1);
        }
        for id in pending {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                notify.dismiss(id);
            });
        }
    });

    view! {
        <div class="toaster">
            {move || entries.get().into_iter().map(|entry| {
                let class = match entry.variant {
                    Variant::Success => "toast success",
                    Variant::Error => "toast error",
                    Variant::Info => "toast info",
                };
                let id = entry.id;
                view! {
                    <div class=class>
                        <div class="toast-title">{entry.title}</div>
                        <div class="toast-description">{entry.description}</div>
                        <button class="toast-close" on:click=move |_| notify.dismiss(id)>
                            "x"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
