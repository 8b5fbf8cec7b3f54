//! Application constants

use std::time::Duration;

pub const BRAND_NAME: &str = "Rêveoulé";
pub const BRAND_TAGLINE: &str = "Skincare & Beauty";

pub const SEARCH_PLACEHOLDER: &str = "Search for products...";
pub const MOBILE_SEARCH_PLACEHOLDER: &str = "Search products...";

// Exit transition lengths; must match the stylesheet animations
pub const DROPDOWN_EXIT: Duration = Duration::from_millis(200);
pub const MOBILE_MENU_EXIT: Duration = Duration::from_millis(300);

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
