//! Cook Form
//!
//! Create/edit screen for cooks. A cook is an existing employee, so creation
//! picks from the employee catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SelectField, TextField};
use crate::context::{use_api, use_app, Entity, Page};
use crate::models::{Cook, CookPayload, Employee, Resource};
use crate::notify::use_notifier;

#[component]
pub fn CookForm(id: Option<i64>) -> impl IntoView {
    let api = use_api();
    let notify = use_notifier();
    let app = use_app();

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (employees_loading, set_employees_loading) = signal(true);

    let (rg, set_rg) = signal(id.map(|id| id.to_string()).unwrap_or_default());
    let (alias, set_alias) = signal(String::new());
    let (goal, set_goal) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());
    let (contract_date, set_contract_date) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list::<Employee>(Employee::ENDPOINT).await {
                    Ok(rows) => set_employees.set(rows),
                    Err(err) => notify.error("Failed to load employees", err.to_string()),
                }
                set_employees_loading.set(false);
            });
        });
    }

    if let Some(id) = id {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_one::<Cook>(Cook::ENDPOINT, id).await {
                    Ok(cook) => {
                        set_alias.set(cook.alias.unwrap_or_default());
                        set_goal.set(cook.monthly_recipe_goal.to_string());
                        set_deadline.set(cook.initial_deadline_days.to_string());
                        set_contract_date.set(
                            cook.contract_date.map(|d| d.to_string()).unwrap_or_default(),
                        );
                    }
                    Err(err) => notify.error("Failed to load cook", err.to_string()),
                }
            });
        });
    }

    let api_submit = api.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if rg.get().is_empty() || goal.get().is_empty() || deadline.get().is_empty() {
            notify.error(
                "Required fields",
                "Employee, monthly goal and initial deadline are required.",
            );
            return;
        }
        let parsed = (|| {
            let contract = contract_date.get_untracked();
            Some(CookPayload {
                rg: rg.get_untracked().parse().ok()?,
                alias: {
                    let alias = alias.get_untracked().trim().to_string();
                    if alias.is_empty() { None } else { Some(alias) }
                },
                monthly_recipe_goal: goal.get_untracked().parse().ok()?,
                initial_deadline_days: deadline.get_untracked().parse().ok()?,
                contract_date: if contract.is_empty() {
                    None
                } else {
                    Some(contract.parse().ok()?)
                },
            })
        })();
        let Some(payload) = parsed else {
            notify.error("Invalid values", "Numeric fields and date must be valid.");
            return;
        };
        set_submitting.set(true);
        let api = api_submit.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.update::<Cook, _>(Cook::ENDPOINT, id, &payload).await,
                None => api.create::<Cook, _>(Cook::ENDPOINT, &payload).await,
            };
            match result {
                Ok(_) => {
                    notify.success(
                        if id.is_some() { "Cook updated" } else { "Cook created" },
                        "The cook was saved.",
                    );
                    app.goto(Page::List(Entity::Cooks));
                }
                Err(err) => notify.error("Failed to save cook", err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let employee_options = Signal::derive(move || {
        employees
            .get()
            .into_iter()
            .map(|employee| (employee.rg.to_string(), employee.name))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page form-page">
            <h1>{if id.is_some() { "Edit Cook" } else { "New Cook" }}</h1>
            <form on:submit=on_submit>
                {move || if id.is_none() {
                    view! {
                        <SelectField
                            label="Employee"
                            value=rg
                            set_value=set_rg
                            options=employee_options
                            loading=Signal::derive(move || employees_loading.get())
                        />
                    }.into_any()
                } else {
                    view! { <p class="locked-field">{format!("RG: {}", rg.get())}</p> }.into_any()
                }}
                <TextField label="Alias" value=alias set_value=set_alias placeholder="Optional" />
                <TextField
                    label="Monthly recipe goal"
                    value=goal
                    set_value=set_goal
                    input_type="number"
                />
                <TextField
                    label="Initial deadline (days)"
                    value=deadline
                    set_value=set_deadline
                    input_type="number"
                />
                <TextField
                    label="Contract date"
                    value=contract_date
                    set_value=set_contract_date
                    input_type="date"
                />
                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| app.goto(Page::List(Entity::Cooks))
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
