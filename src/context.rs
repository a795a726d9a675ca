//! Application Context
//!
//! Shared handle provided via Leptos Context API. Runs the store's
//! transitions and carries out the fetches they ask for.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::ApiConfig;
use crate::store::{Applied, AppStore, ListRequest, Refresh, StatsRequest, View};

/// App-wide handle; `Copy` so event handlers can capture it freely
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self { store, config: StoredValue::new(config) }
    }

    fn base_url(&self) -> String {
        self.config.with_value(|c| c.base_url.clone())
    }

    /// Initial stats + unfiltered list
    pub fn mount(&self) {
        web_sys::console::log_1(&format!("[Dashboard] Mounted, service at {}", self.base_url()).into());
        if let Some(refresh) = self.store.try_update(|s| s.mount()) {
            self.run(refresh);
        }
    }

    /// Poller callback. Only sequence numbers move, so nobody is notified.
    pub fn tick(&self) {
        if let Some(refresh) = self.store.try_maybe_update(|s| (false, s.tick())) {
            self.run(refresh);
        }
    }

    /// Stat tile click
    pub fn select_view(&self, view: View) {
        web_sys::console::log_1(&format!("[Dashboard] View -> {}", view.key()).into());
        if let Some(req) = self.store.try_update(|s| s.select_view(view)) {
            self.load_complaints(req);
        }
    }

    /// Quick Report submit; blank drafts never reach the network
    pub fn submit(&self) {
        let submission = self.store.try_maybe_update(|s| {
            let payload = s.begin_submission();
            (payload.is_some(), payload)
        });
        let Some(payload) = submission.flatten() else {
            return;
        };
        let ctx = *self;
        let base = self.base_url();
        spawn_local(async move {
            match api::create_complaint(&base, &payload).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[Dashboard] Complaint submitted ({})", payload.category.as_str()).into());
                    if let Some(refresh) = ctx.store.try_update(|s| s.submission_succeeded()) {
                        ctx.run(refresh);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Dashboard] Submission failed: {}", e).into());
                    ctx.store.try_update(|s| s.submission_failed(e.to_string()));
                }
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.store.try_update(|s| s.dismiss_notice());
    }

    fn run(&self, refresh: Refresh) {
        self.load_stats(refresh.stats);
        if let Some(list) = refresh.list {
            self.load_complaints(list);
        }
    }

    fn load_stats(&self, req: StatsRequest) {
        let store = self.store;
        let base = self.base_url();
        spawn_local(async move {
            match api::fetch_stats(&base).await {
                Ok(stats) => {
                    let applied = store
                        .try_maybe_update(|s| {
                            let applied = s.apply_stats(req, stats);
                            (applied.changed(), applied)
                        })
                        .unwrap_or(Applied::Stale);
                    if !applied.is_current() {
                        web_sys::console::warn_1(&format!("[Dashboard] Dropped stale stats response #{}", req.seq).into());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Dashboard] Stats #{} failed: {}", req.seq, e).into());
                    store.try_maybe_update(|s| {
                        let applied = s.stats_failed(req, e.to_string());
                        (applied.changed(), ())
                    });
                }
            }
        });
    }

    fn load_complaints(&self, req: ListRequest) {
        let store = self.store;
        let base = self.base_url();
        let filter = req.status.map(|s| s.as_str()).unwrap_or("all");
        spawn_local(async move {
            match api::list_complaints(&base, req.status).await {
                Ok(complaints) => {
                    let count = complaints.len();
                    let applied = store
                        .try_maybe_update(|s| {
                            let applied = s.apply_complaints(req, complaints);
                            (applied.changed(), applied)
                        })
                        .unwrap_or(Applied::Stale);
                    if applied.is_current() {
                        web_sys::console::log_1(&format!("[Dashboard] Loaded {} complaints (status={})", count, filter).into());
                    } else {
                        web_sys::console::warn_1(&format!("[Dashboard] Dropped stale list response #{} (status={})", req.seq, filter).into());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Dashboard] List #{} (status={}) failed: {}", req.seq, filter, e).into());
                    store.try_maybe_update(|s| {
                        let applied = s.complaints_failed(req, e.to_string());
                        (applied.changed(), ())
                    });
                }
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
