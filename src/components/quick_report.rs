//! Quick Report Form Component
//!
//! Draft fields live in the store so a failed submission keeps them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, Level, Priority};
use crate::store::{AppStateStoreFields, DraftStoreFields};

/// (value, selected) for each option of a select
fn option_states<T: Copy + PartialEq>(all: &[T], current: T, label: fn(T) -> &'static str) -> Vec<(&'static str, bool)> {
    all.iter().map(|&option| (label(option), option == current)).collect()
}

/// Options carry their own `selected`, so the store's value shows on first
/// render without waiting for a later write.
fn render_options(states: Vec<(&'static str, bool)>) -> impl IntoView {
    states
        .into_iter()
        .map(|(value, selected)| view! { <option value=value selected=selected>{value}</option> })
        .collect_view()
}

#[component]
pub fn QuickReportForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = ctx.store.draft();
    let submitting = ctx.store.submitting();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="panel quick-report" on:submit=on_submit>
            <h3>"Quick Report"</h3>
            <textarea
                class="report-text"
                placeholder="Describe your issue (any language)"
                prop:value=move || draft.text().get()
                on:input=move |ev| draft.text().set(event_target_value(&ev))
            />
            <div class="select-row">
                <select on:change=move |ev| {
                    if let Some(category) = Category::parse(&event_target_value(&ev)) {
                        draft.category().set(category);
                    }
                }>
                    {move || render_options(option_states(&Category::ALL, draft.category().get(), Category::as_str))}
                </select>
                <select on:change=move |ev| {
                    if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                        draft.priority().set(priority);
                    }
                }>
                    {move || render_options(option_states(&Priority::ALL, draft.priority().get(), Priority::as_str))}
                </select>
            </div>
            <select class="full-width" on:change=move |ev| {
                if let Some(level) = Level::parse(&event_target_value(&ev)) {
                    draft.level().set(level);
                }
            }>
                {move || render_options(option_states(&Level::ALL, draft.level().get(), Level::as_str))}
            </select>
            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "➤ Submit" }}
            </button>
            <div class="hint">
                "⚠ Voice input, AI classification, translation, and maps are part of the full build and can be enabled next."
            </div>
        </form>
    }
}
