//! Navbar state management

use leptos::prelude::*;
use leptos::reactive::effect::ImmediateEffect;
use shared::state::NavState;

/// Per-mount navbar context, provided by [`crate::components::Navbar`]
/// to its child components.
#[derive(Clone, Copy)]
pub struct NavbarContext {
    pub state: RwSignal<NavState>,
}

impl NavbarContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NavState::new()),
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.with(|state| state.is_mobile_menu_open())
    }

    pub fn is_resources_open(&self) -> bool {
        self.state.with(|state| state.is_resources_open())
    }

    pub fn search_query(&self) -> String {
        self.state.with(|state| state.search_query().to_string())
    }

    pub fn toggle_mobile_menu(&self) {
        self.state.update(NavState::toggle_mobile_menu);
        let open = self.state.with_untracked(NavState::is_mobile_menu_open);
        log::debug!("mobile menu open: {}", open);
    }

    pub fn close_mobile_menu(&self) {
        let mut closed = false;
        self.state.maybe_update(|state| {
            closed = state.close_mobile_menu();
            closed
        });
        if closed {
            log::debug!("mobile menu closed on route change");
        }
    }

    pub fn open_resources(&self) {
        self.state.maybe_update(NavState::open_resources);
    }

    pub fn close_resources(&self) {
        self.state.maybe_update(NavState::close_resources);
    }

    pub fn set_search_query(&self, query: String) {
        self.state.update(|state| state.set_search_query(query));
    }

    /// Navigate to the products search for the current query, then clear it.
    /// Blank queries are dropped without touching state.
    pub fn submit_search(&self, navigate: impl FnOnce(&str)) {
        match self.state.with_untracked(NavState::search_target) {
            Ok(target) => {
                log::info!("search redirect to {}", target);
                navigate(&target);
                self.state.update(NavState::clear_search_query);
            }
            Err(e) => log::debug!("search ignored: {}", e),
        }
    }
}

impl Default for NavbarContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_navbar_context() -> NavbarContext {
    let context = NavbarContext::new();
    provide_context(context);
    context
}

pub fn use_navbar_context() -> NavbarContext {
    expect_context::<NavbarContext>()
}

/// Close the mobile menu whenever anything `navigation` tracks notifies.
///
/// `navigation` must track a source that fires on every navigation, same-URL
/// ones included; path and query memos alone stay silent when the URL repeats.
/// The returned effect lives until it is dropped.
pub fn close_menu_on_navigation(
    navbar: NavbarContext,
    navigation: impl Fn() + Send + Sync + 'static,
) -> ImmediateEffect {
    ImmediateEffect::new(move || {
        navigation();
        navbar.close_mobile_menu();
    })
}
