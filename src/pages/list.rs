//! Entity List Page
//!
//! Generic list screen: header with new/refresh actions, schema table with
//! edit/delete per row. Works for every entity via [`Resource`] + [`Tabular`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{entity_table, DeleteConfirmButton};
use crate::context::{use_api, use_app, Entity, Page};
use crate::fetching::ListResource;
use crate::models::Resource;
use crate::notify::use_notifier;
use crate::schema::Tabular;

pub fn list_page<T: Resource + Tabular>(entity: Entity) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let resource = ListResource::<T>::new();

    // Initial load, once per mount.
    {
        let api = api.clone();
        Effect::new(move |_| {
            web_sys::console::log_1(&format!("[list] loading {}", T::LABEL).into());
            let api = api.clone();
            spawn_local(async move {
                resource.load(&api, &notify).await;
            });
        });
    }

    let api_rows = api.clone();
    let table = entity_table::<T, _, _>(resource.items, move |item: &T| {
        let id = item.id();
        let edit_id = id.to_string();
        let api = api_rows.clone();
        view! {
            <button
                class="action-btn"
                on:click=move |_| app.goto(Page::Edit(entity, edit_id.clone()))
            >
                "Edit"
            </button>
            <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                let api = api.clone();
                let id = id.clone();
                spawn_local(async move {
                    resource.delete_item(&api, &notify, &id).await;
                });
            }) />
        }
    });

    let api_refresh = api.clone();
    view! {
        <div class="page">
            <div class="page-header">
                <h1>{T::LABEL}</h1>
                <div class="page-actions">
                    <button
                        class="refresh-btn"
                        on:click=move |_| {
                            let api = api_refresh.clone();
                            spawn_local(async move {
                                resource.refresh(&api, &notify).await;
                            });
                        }
                    >
                        "Refresh"
                    </button>
                    <button class="new-btn" on:click=move |_| app.goto(Page::New(entity))>
                        {format!("New {}", T::LABEL_ONE.to_lowercase())}
                    </button>
                </div>
            </div>

            <Show when=move || resource.is_loading()>
                <p class="loading">{format!("Loading {}...", T::LABEL.to_lowercase())}</p>
            </Show>

            {table}
        </div>
    }
}
