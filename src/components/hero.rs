//! Landing Hero Component

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content fade-in">
                <div class="hero-pill">"🎙 Voice + Multilingual AI"</div>
                <h1 class="hero-title">"CitizenConnect 2.0"</h1>
                <p class="hero-tagline">
                    "Report issues in any Indian language. Smart AI routes them instantly and keeps you updated."
                </p>
            </div>
        </header>
    }
}
