//! Sidebar Navigation
//!
//! Entity navigation column; selecting an entry switches to that list page.

use leptos::prelude::*;

use crate::context::{use_app, Entity, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = use_app();

    view! {
        <nav class="sidebar">
            <div class="sidebar-title">"Recipe Admin"</div>
            {Entity::ALL.iter().map(|entity| {
                let entity = *entity;
                let is_active = move || {
                    matches!(
                        app.page.get(),
                        Page::List(e) | Page::New(e) | Page::Edit(e, _) if e == entity
                    )
                };
                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| app.goto(Page::List(entity))
                    >
                        {entity.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
