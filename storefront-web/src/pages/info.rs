//! Static informational pages behind the navbar links

use leptos::prelude::*;

#[component]
fn InfoPage(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{title}</h1>
            <p class="page__lead">{lead}</p>
        </section>
    }
}

#[component]
pub fn PlansPage() -> impl IntoView {
    view! { <InfoPage title="Plans" lead="Skincare routines delivered on your schedule."/> }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <InfoPage title="About Us" lead="Gentle formulas, honest ingredients."/> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <InfoPage title="Contact" lead="Questions about an order or a product? Reach out."/> }
}

#[component]
pub fn SkinAdvisorPage() -> impl IntoView {
    view! { <InfoPage title="AI Skin Advisor" lead="Personalised recommendations for your skin type."/> }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <InfoPage title="Sign in" lead="Welcome back."/> }
}

#[component]
pub fn JoinPage() -> impl IntoView {
    view! { <InfoPage title="Join" lead="Create an account to save favourites and track orders."/> }
}
