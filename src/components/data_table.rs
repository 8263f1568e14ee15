//! Entity Table
//!
//! Schema-driven table rendering for any `Tabular` entity, with a trailing
//! actions cell supplied by the caller.

use leptos::prelude::*;

use crate::models::Resource;
use crate::schema::Tabular;

pub fn entity_table<T, A, AV>(items: RwSignal<Vec<T>>, actions: A) -> impl IntoView
where
    T: Resource + Tabular,
    A: Fn(&T) -> AV + Send + Sync + 'static,
    AV: IntoView + 'static,
{
    let header: Vec<_> = T::columns()
        .iter()
        .map(|column| view! { <th>{column.label}</th> })
        .collect();

    view! {
        <table class="entity-table">
            <thead>
                <tr>{header}<th class="actions-col">"Actions"</th></tr>
            </thead>
            <tbody>
                {move || items.get().into_iter().map(|item| {
                    let cells: Vec<_> = T::columns()
                        .iter()
                        .map(|column| view! { <td>{(column.value)(&item)}</td> })
                        .collect();
                    view! {
                        <tr>{cells}<td class="actions-col">{actions(&item)}</td></tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
