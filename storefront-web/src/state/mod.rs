//! Reactive state handles provided through Leptos context

pub mod navbar;
