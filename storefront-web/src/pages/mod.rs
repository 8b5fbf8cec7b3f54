//! Page modules - one per path the navbar links to

pub mod home;
pub mod info;
pub mod products;

pub use home::HomePage;
pub use info::{AboutPage, ContactPage, JoinPage, PlansPage, SignInPage, SkinAdvisorPage};
pub use products::ProductsPage;
