//! Notice Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, Notice};

/// Non-blocking, dismissible status line
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let notice = ctx.store.notice();

    move || {
        notice.get().map(|n| {
            let class = match &n {
                Notice::StaleData { .. } => "notice notice-warning",
                Notice::SubmissionFailed { .. } => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span>{n.message()}</span>
                    <button type="button" class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
