//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;
use shared::search::SEARCH_PATH;

use crate::utils::constants::{BRAND_NAME, BRAND_TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1 class="page__title">{BRAND_NAME}</h1>
            <p class="page__lead">{BRAND_TAGLINE}</p>
            <A href=SEARCH_PATH attr:class="btn">"Shop products"</A>
        </section>
    }
}
