//! Stat Tiles
//!
//! Aggregate counts; clicking a tile switches the list's status filter.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Stats;
use crate::store::{AppStateStoreFields, View};

/// Tile order, label and gradient class
const TILES: &[(View, &str, &str)] = &[
    (View::All, "Total Complaints", "grad-purple-blue"),
    (View::Pending, "Pending", "grad-yellow-orange"),
    (View::InProgress, "In Progress", "grad-blue-purple"),
    (View::Resolved, "Resolved", "grad-green-emerald"),
];

/// Count shown on the tile for a view
pub fn tile_count(view: View, stats: &Stats) -> u32 {
    match view {
        View::All => stats.total,
        View::Pending => stats.pending,
        View::InProgress => stats.in_progress,
        View::Resolved => stats.resolved,
    }
}

/// One clickable count
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<u32>,
    accent: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="stat-card"
            class:active=move || active.get()
            on:click=move |_| on_click.run(())
        >
            <div class="stat-label">"📊 " {label}</div>
            <div class=format!("stat-value {}", accent)>{move || value.get()}</div>
        </button>
    }
}

/// The four tiles
#[component]
pub fn StatTiles() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="stats-grid">
            {TILES.iter().map(|&(view, label, accent)| {
                view! {
                    <StatCard
                        label=label
                        value=Signal::derive(move || tile_count(view, &store.stats().get()))
                        accent=accent
                        active=Signal::derive(move || store.view().get() == view)
                        on_click=move |_| ctx.select_view(view)
                    />
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_counts() {
        let stats = Stats { total: 10, pending: 3, in_progress: 2, resolved: 5 };
        let counts: Vec<_> = TILES.iter().map(|&(view, _, _)| tile_count(view, &stats)).collect();
        assert_eq!(counts, vec![10, 3, 2, 5]);
    }

    #[test]
    fn test_tile_labels() {
        let labels: Vec<_> = TILES.iter().map(|&(_, label, _)| label).collect();
        assert_eq!(labels, vec!["Total Complaints", "Pending", "In Progress", "Resolved"]);
    }
}
