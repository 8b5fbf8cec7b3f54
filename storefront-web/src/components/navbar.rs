//! Navigation Bar Component
//!
//! Logo, search, desktop links with the hover-only Resources dropdown,
//! sign-in/join actions, and a mobile panel repeating links and search.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use shared::nav::{NavLink, HOME_PATH, JOIN_PATH, NAV_LINKS, RESOURCE_LINKS, SIGN_IN_PATH};

use crate::components::icons::{ChevronDownIcon, GlobeIcon, SearchIcon};
use crate::state::navbar::{close_menu_on_navigation, provide_navbar_context, use_navbar_context};
use crate::utils::constants::{
    BRAND_NAME, BRAND_TAGLINE, DROPDOWN_EXIT, MOBILE_MENU_EXIT, MOBILE_SEARCH_PLACEHOLDER,
    SEARCH_PLACEHOLDER,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let navbar = provide_navbar_context();
    let location = use_location();
    let (pathname, search, nav_state) = (location.pathname, location.search, location.state);

    // Path and query memos skip repeated URLs; the state signal is set on
    // every navigation
    let route_observer = close_menu_on_navigation(navbar, move || {
        pathname.track();
        search.track();
        nav_state.track();
    });
    on_cleanup(move || drop(route_observer));

    let mobile_open = Memo::new(move |_| navbar.is_mobile_menu_open());

    view! {
        <nav class="navigation navigation--enter">
            <div class="navigation__container container">
                <A href=HOME_PATH attr:class="navigation__logo">
                    <span class="navigation__logo-text">{BRAND_NAME}</span>
                    <span class="navigation__logo-tagline">{BRAND_TAGLINE}</span>
                </A>

                <DesktopSearch/>

                <ul class="navigation__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="navigation__item">
                                    {if link.has_dropdown {
                                        view! { <ResourcesDropdown link=link/> }.into_any()
                                    } else {
                                        view! { <DesktopLink link=link/> }.into_any()
                                    }}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="navigation__actions">
                    <button class="navigation__globe" aria-label="Language">
                        <GlobeIcon/>
                    </button>
                    <A href=SIGN_IN_PATH attr:class="navigation__signin">"Sign in"</A>
                    <A href=JOIN_PATH attr:class="navigation__join-btn">"Join"</A>
                </div>

                <button
                    class=move || {
                        if mobile_open.get() {
                            "navigation__toggle navigation__toggle--open"
                        } else {
                            "navigation__toggle"
                        }
                    }
                    aria-label="Toggle menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| navbar.toggle_mobile_menu()
                >
                    <span class="navigation__toggle-line"></span>
                    <span class="navigation__toggle-line"></span>
                    <span class="navigation__toggle-line"></span>
                </button>
            </div>

            <AnimatedShow
                when=mobile_open
                show_class="navigation__mobile--enter"
                hide_class="navigation__mobile--exit"
                hide_delay=MOBILE_MENU_EXIT
            >
                <MobileMenu/>
            </AnimatedShow>
        </nav>
    }
}

/// Plain top-level link, highlighted on an exact path match.
#[component]
fn DesktopLink(link: &'static NavLink) -> impl IntoView {
    let pathname = use_location().pathname;
    let class = move || {
        if pathname.with(|path| link.is_active(path)) {
            "navigation__link navigation__link--active"
        } else {
            "navigation__link"
        }
    };

    view! {
        <A href=link.path attr:class=class>
            {link.label}
        </A>
    }
}

/// Hover region: pointer enter opens the panel, pointer leave closes it.
#[component]
fn ResourcesDropdown(link: &'static NavLink) -> impl IntoView {
    let navbar = use_navbar_context();
    let open = Memo::new(move |_| navbar.is_resources_open());

    view! {
        <div
            class="navigation__dropdown"
            on:mouseenter=move |_| navbar.open_resources()
            on:mouseleave=move |_| navbar.close_resources()
        >
            <button
                class="navigation__link navigation__link--dropdown"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
            >
                {link.label}
                <ChevronDownIcon/>
            </button>
            <AnimatedShow
                when=open
                show_class="navigation__dropdown-menu--enter"
                hide_class="navigation__dropdown-menu--exit"
                hide_delay=DROPDOWN_EXIT
            >
                <div class="navigation__dropdown-menu">
                    {RESOURCE_LINKS
                        .iter()
                        .map(|resource| {
                            view! {
                                <A href=resource.path attr:class="navigation__dropdown-link">
                                    {resource.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedShow>
        </div>
    }
}

/// Wires a search form to the shared query and the router.
fn on_search_submit() -> impl Fn(SubmitEvent) + Clone + 'static {
    let navbar = use_navbar_context();
    let navigate = use_navigate();
    move |ev: SubmitEvent| {
        ev.prevent_default();
        navbar.submit_search(|target| navigate(target, Default::default()));
    }
}

#[component]
fn DesktopSearch() -> impl IntoView {
    let navbar = use_navbar_context();

    view! {
        <form class="navigation__search" on:submit=on_search_submit()>
            <SearchIcon icon_class="navigation__search-icon"/>
            <input
                type="text"
                class="navigation__search-input"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=move || navbar.search_query()
                on:input=move |ev| navbar.set_search_query(event_target_value(&ev))
            />
        </form>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let navbar = use_navbar_context();
    let pathname = use_location().pathname;

    view! {
        <div class="navigation__mobile">
            <form class="navigation__mobile-search" on:submit=on_search_submit()>
                <input
                    type="text"
                    class="navigation__mobile-search-input"
                    placeholder=MOBILE_SEARCH_PLACEHOLDER
                    prop:value=move || navbar.search_query()
                    on:input=move |ev| navbar.set_search_query(event_target_value(&ev))
                />
                <button type="submit" class="navigation__mobile-search-btn" aria-label="Search">
                    <SearchIcon/>
                </button>
            </form>

            // Following a panel link closes the menu even when the URL is unchanged
            <ul class="navigation__mobile-links" on:click=move |_| navbar.close_mobile_menu()>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let class = move || {
                            if pathname.with(|path| link.is_active(path)) {
                                "navigation__mobile-link navigation__mobile-link--active"
                            } else {
                                "navigation__mobile-link"
                            }
                        };
                        view! {
                            <li class="navigation__mobile-item">
                                <A href=link.path attr:class=class>
                                    {link.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="navigation__mobile-actions" on:click=move |_| navbar.close_mobile_menu()>
                <A href=SIGN_IN_PATH attr:class="navigation__mobile-signin">"Sign in"</A>
                <A href=JOIN_PATH attr:class="navigation__mobile-join">"Join"</A>
            </div>
        </div>
    }
}
