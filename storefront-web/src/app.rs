//! Rêveoulé Storefront - Leptos Frontend
//!
//! Application shell: router, navigation bar and the pages it links to.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use shared::nav::HOME_PATH;

use crate::components::Navbar;
use crate::pages::{
    AboutPage, ContactPage, HomePage, JoinPage, PlansPage, ProductsPage, SignInPage,
    SkinAdvisorPage,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/products") view=ProductsPage/>
                        <Route path=path!("/plans") view=PlansPage/>
                        <Route path=path!("/about") view=AboutPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                        <Route path=path!("/skin-advisor") view=SkinAdvisorPage/>
                        <Route path=path!("/signin") view=SignInPage/>
                        <Route path=path!("/join") view=JoinPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1 class="page__title">"404 - Page Not Found"</h1>
            <p class="page__lead">"The page you're looking for doesn't exist."</p>
            <A href=HOME_PATH attr:class="btn">"Go to Home"</A>
        </section>
    }
}
