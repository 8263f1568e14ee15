//! Employee Form
//!
//! Create/edit screen for employees. The RG doubles as the record id and is
//! locked when editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TextField;
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Employee, EmployeePayload, Resource};
use crate::notify::use_notifier;

#[component]
pub fn EmployeeForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (rg, set_rg) = signal(id.map(|id| id.to_string()).unwrap_or_default());
    let (name, set_name) = signal(String::new());
    let (admission_date, set_admission_date) = signal(String::new());
    let (salary, set_salary) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<Employee>(Employee::ENDPOINT, id).await {
                    Ok(employee) => {
                        set_name.set(employee.name);
                        set_admission_date.set(employee.admission_date.to_string());
                        set_salary.set(employee.salary.to_string());
                    }
                    Err(err) => notify.error("Failed to load employee", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if rg.get().is_empty()
            || name.get().trim().is_empty()
            || admission_date.get().is_empty()
            || salary.get().is_empty()
        {
            notify.error("Required fields", "All employee fields are required.");
            return;
        }
        let parsed = (|| {
            Some(EmployeePayload {
                rg: rg.get_untracked().parse().ok()?,
                name: name.get_untracked().trim().to_string(),
                admission_date: admission_date.get_untracked().parse().ok()?,
                salary: salary.get_untracked().parse().ok()?,
            })
        })();
        let Some(payload) = parsed else {
            notify.error("Invalid values", "RG, date and salary must be valid.");
            return;
        };
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.update::<Employee, _>(Employee::ENDPOINT, id, &payload).await,
                None => api.create::<Employee, _>(Employee::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Employee updated" } else { "Employee created" },
                        "The employee was saved.",
                    );
                    app.goto(Page::List(Entity::Employees));
                }
                Err(err) => notify.error("Failed to save employee", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Employee" } else { "New Employee" }}</h1>
            <form on:submit=on_submit>
                {move || if id.is_none() {
                    view! {
                        <TextField
                            label="RG"
                            value=rg
                            set_value=set_rg
                            input_type="number"
                            placeholder="Identity number"
                        />
                    }.into_any()
                } else {
                    view! { <p class="locked-field">{format!("RG: {}", rg.get())}</p> }.into_any()
                }}
                <TextField label="Name" value=name set_value=set_name placeholder="Full name" />
                <TextField
                    label="Admission date"
                    value=admission_date
                    set_value=set_admission_date
                    input_type="date"
                />
                <TextField
                    label="Salary"
                    value=salary
                    set_value=set_salary
                    input_type="number"
                    placeholder="e.g. 2500.00"
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Employees))
                    >
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
