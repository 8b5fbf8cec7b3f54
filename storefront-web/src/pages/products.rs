//! Products Page - landing point of the navbar search redirect

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shared::search::SEARCH_PARAM;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let search = move || query.with(|params| params.get(SEARCH_PARAM));

    view! {
        <section class="page page--products">
            <h1 class="page__title">"Products"</h1>
            {move || match search() {
                Some(term) => view! {
                    <p class="page__lead">
                        "Results for "<span class="page__search-term">"\u{201c}"{term}"\u{201d}"</span>
                    </p>
                }
                .into_any(),
                None => view! { <p class="page__lead">"Browse the full collection."</p> }.into_any(),
            }}
        </section>
    }
}
