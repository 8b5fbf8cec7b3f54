//! Inline SVG icons used by the navigation bar

use leptos::prelude::*;

#[component]
pub fn SearchIcon(#[prop(optional)] icon_class: &'static str) -> impl IntoView {
    view! {
        <svg class=icon_class width="20" height="20" viewBox="0 0 20 20" fill="none" stroke="currentColor">
            <circle cx="9" cy="9" r="7" stroke-width="1.5"/>
            <path d="m14 14 5 5" stroke-width="1.5" stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg width="12" height="12" viewBox="0 0 12 12" fill="currentColor">
            <path d="M6 8L2 4h8l-4 4z"/>
        </svg>
    }
}

#[component]
pub fn GlobeIcon() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none" stroke="currentColor">
            <circle cx="10" cy="10" r="8" stroke-width="1.5"/>
            <path d="M2 10h16M10 2a8 8 0 018 8 8 8 0 01-8 8" stroke-width="1.5"/>
        </svg>
    }
}
