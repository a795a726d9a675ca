//! Complaint List Component
//!
//! Renders the fetched list with a local search box. The search only narrows
//! what is already loaded; it never triggers a fetch.

use leptos::prelude::*;

use super::badge::{priority_tone, status_tone, Badge, Tone};
use crate::context::use_app_context;
use crate::filter::filter_by_text;
use crate::models::Complaint;
use crate::store::AppStateStoreFields;

#[component]
pub fn ComplaintList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (query, set_query) = signal(String::new());
    let filtered = Memo::new(move |_| filter_by_text(&store.complaints().get(), &query.get()));

    view! {
        <div class="panel complaint-list">
            <div class="panel-header">
                <h3>{move || store.view().get().title()}</h3>
                <div class="shown-count">{move || format!("{} shown", filtered.read().len())}</div>
            </div>

            <input
                type="search"
                class="list-search"
                placeholder="Search complaints..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="complaint-scroll">
                <For
                    each=move || filtered.get()
                    key=|c| c.complaint_id.clone()
                    children=move |c| view! { <ComplaintCard complaint=c /> }
                />
                <Show when=move || filtered.read().is_empty()>
                    <div class="empty-state">"No complaints"</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    let location = complaint.location.map(|loc| format!("{}, {}", loc.lat, loc.lng));

    view! {
        <div class="complaint-card">
            <div class="complaint-head">
                <div class="complaint-text">{complaint.text}</div>
                <Badge text=complaint.status.as_str() tone=status_tone(complaint.status) />
            </div>
            <div class="complaint-badges">
                <Badge text=complaint.category.as_str() tone=Tone::Purple />
                <Badge text=complaint.priority.as_str() tone=priority_tone(complaint.priority) />
                {complaint.district.map(|d| view! { <Badge text=d tone=Tone::Blue /> })}
            </div>
            {location.map(|loc| view! { <div class="complaint-location">"📍 " {loc}</div> })}
        </div>
    }
}
