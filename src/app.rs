//! CitizenConnect Frontend App
//!
//! Root component: hero, stat tiles, complaint list and report form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ComplaintList, Hero, NoticeBanner, QuickReportForm, StatTiles};
use crate::config::{ApiConfig, REFRESH_INTERVAL_MS};
use crate::context::AppContext;
use crate::poller::Poller;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, ApiConfig::load());

    // Provide context to all children
    provide_context(ctx);

    // One poller per mounted App, stopped on teardown
    let poller = StoredValue::new_local(Poller::new(REFRESH_INTERVAL_MS));

    // Initial load, then periodic refresh
    Effect::new(move |_| {
        ctx.mount();
        poller.update_value(|p| p.start(move || ctx.tick()));
    });

    on_cleanup(move || {
        poller.try_update_value(|p| p.stop());
    });

    view! {
        <div class="app-layout">
            <Hero />

            <main class="dashboard">
                <NoticeBanner />
                <StatTiles />

                <div class="content-grid">
                    <section class="list-column">
                        <ComplaintList />
                    </section>

                    <aside class="side-column">
                        <QuickReportForm />
                        <AtAGlance />
                    </aside>
                </div>
            </main>

            <footer class="footer">
                "CitizenConnect 2.0 — Demo UI. Firebase/Gemini/Maps integrations can be wired next."
            </footer>
        </div>
    }
}

#[component]
fn AtAGlance() -> impl IntoView {
    view! {
        <div class="panel">
            <h3>"At a glance"</h3>
            <ul class="glance-list">
                <li>"🕒 Live auto-refresh every few seconds"</li>
                <li>"✅ Click any stat to filter the list"</li>
            </ul>
        </div>
    }
}
