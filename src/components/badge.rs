//! Badge Component
//!
//! Small colored pill used on complaint cards.

use leptos::prelude::*;

use crate::models::{Priority, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gray,
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Gray => "badge badge-gray",
            Tone::Blue => "badge badge-blue",
            Tone::Green => "badge badge-green",
            Tone::Yellow => "badge badge-yellow",
            Tone::Red => "badge badge-red",
            Tone::Purple => "badge badge-purple",
        }
    }
}

pub fn status_tone(status: Status) -> Tone {
    match status {
        Status::Resolved => Tone::Green,
        Status::InProgress => Tone::Yellow,
        Status::Pending => Tone::Red,
    }
}

pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Red,
        Priority::Medium => Tone::Yellow,
        Priority::Low => Tone::Green,
    }
}

#[component]
pub fn Badge(#[prop(into)] text: String, #[prop(optional)] tone: Option<Tone>) -> impl IntoView {
    let tone = tone.unwrap_or(Tone::Gray);
    view! { <span class=tone.class()>{text}</span> }
}
