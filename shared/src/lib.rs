//! # Storefront Navigation Model
//!
//! Framework-free model behind the storefront navigation bar. The Leptos
//! frontend in `storefront-web` wraps these types in signals; everything here
//! is plain Rust so the behavior can be tested without a browser.
//!
//! ## Structure
//!
//! - **[`nav`]**: Static link tables and the active-link rule
//!   - **[`nav::NAV_LINKS`]**: Top-level links (Products, Plans, Resources)
//!   - **[`nav::RESOURCE_LINKS`]**: Links shown inside the Resources dropdown
//!   - **[`nav::is_active`]**: Exact-match highlighting
//! - **[`search`]**: Builds the `/products?search=...` redirect target
//! - **[`state`]**: [`state::NavState`], the per-mount view state and its transitions
//! - **[`error`]**: Crate-wide [`Error`] and [`Result`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::state::NavState;
//!
//! let mut state = NavState::default();
//! state.set_search_query("rose serum");
//!
//! let target = state.search_target().unwrap();
//! assert_eq!(target, "/products?search=rose%20serum");
//!
//! state.clear_search_query();
//! assert!(state.search_query().is_empty());
//! ```

pub mod error;
pub mod nav;
pub mod search;
pub mod state;

pub use error::{Error, Result};
