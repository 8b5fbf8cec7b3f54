//! UI Components

pub mod icons;
pub mod navbar;

pub use navbar::Navbar;
