//! # Navigation View State
//!
//! [`NavState`] holds the three pieces of transient state the navigation bar
//! owns. It lives exactly as long as the mounted navbar.
//!
//! Transitions that can be no-ops return `true` only when they changed
//! something, so a reactive wrapper can skip notifying subscribers.

use crate::error::Result;
use crate::search::search_target;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    mobile_menu_open: bool,
    resources_open: bool,
    /// Shared by the desktop and mobile search fields.
    search_query: String,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_resources_open(&self) -> bool {
        self.resources_open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Hamburger button.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Route changes force the mobile menu shut.
    pub fn close_mobile_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }

    /// Pointer entered the dropdown region.
    pub fn open_resources(&mut self) -> bool {
        !std::mem::replace(&mut self.resources_open, true)
    }

    /// Pointer left the dropdown region.
    pub fn close_resources(&mut self) -> bool {
        std::mem::replace(&mut self.resources_open, false)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search_query(&mut self) {
        self.search_query.clear();
    }

    /// Redirect target for the current query. Does not mutate; the caller
    /// navigates and then calls [`NavState::clear_search_query`].
    pub fn search_target(&self) -> Result<String> {
        search_target(&self.search_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let state = NavState::new();
        assert!(!state.is_mobile_menu_open());
        assert!(!state.is_resources_open());
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_toggle_mobile_menu() {
        let mut state = NavState::new();
        state.toggle_mobile_menu();
        assert!(state.is_mobile_menu_open());
        state.toggle_mobile_menu();
        assert!(!state.is_mobile_menu_open());
    }

    #[test]
    fn test_close_mobile_menu() {
        let mut state = NavState::new();
        state.toggle_mobile_menu();

        assert!(state.close_mobile_menu());
        assert!(!state.is_mobile_menu_open());

        // already closed: nothing to do
        assert!(!state.close_mobile_menu());
        assert!(!state.is_mobile_menu_open());
    }

    #[test]
    fn test_close_mobile_menu_leaves_other_state() {
        let mut state = NavState::new();
        state.toggle_mobile_menu();
        state.open_resources();
        state.set_search_query("toner");

        state.close_mobile_menu();
        assert!(state.is_resources_open());
        assert_eq!(state.search_query(), "toner");
    }

    #[test]
    fn test_dropdown_hover() {
        let mut state = NavState::new();

        assert!(state.open_resources());
        assert!(state.is_resources_open());
        assert!(!state.open_resources());

        assert!(state.close_resources());
        assert!(!state.is_resources_open());
        assert!(!state.close_resources());
    }

    #[test]
    fn test_enter_then_leave_closes_regardless_of_prior_state() {
        for initially_open in [false, true] {
            let mut state = NavState::new();
            if initially_open {
                state.open_resources();
            }
            state.open_resources();
            state.close_resources();
            assert!(!state.is_resources_open());
        }
    }

    #[test]
    fn test_blank_search_leaves_query_untouched() {
        let mut state = NavState::new();
        state.set_search_query("   ");
        assert_eq!(state.search_target(), Err(Error::EmptySearchQuery));
        assert_eq!(state.search_query(), "   ");
    }

    #[test]
    fn test_search_then_clear() {
        let mut state = NavState::new();
        state.set_search_query("  rose serum  ");
        assert_eq!(
            state.search_target().unwrap(),
            "/products?search=%20%20rose%20serum%20%20"
        );

        state.clear_search_query();
        assert_eq!(state.search_query(), "");
        assert_eq!(state.search_target(), Err(Error::EmptySearchQuery));
    }
}
