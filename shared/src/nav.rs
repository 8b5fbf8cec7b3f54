//! # Navigation Link Tables
//!
//! The navigation bar renders from two hardcoded tables. Order matters: links
//! appear in the bar (and in the mobile menu) in table order.

/// Landing page, target of the logo link.
pub const HOME_PATH: &str = "/";

/// Sign-in action shown on the right of the bar and in the mobile menu.
pub const SIGN_IN_PATH: &str = "/signin";

/// Join action shown next to sign-in.
pub const JOIN_PATH: &str = "/join";

/// A top-level entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Rendered on desktop as a hover trigger for [`RESOURCE_LINKS`]
    /// instead of a plain link.
    pub has_dropdown: bool,
}

/// A secondary entry listed inside the dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Products",
        path: "/products",
        has_dropdown: false,
    },
    NavLink {
        label: "Plans",
        path: "/plans",
        has_dropdown: false,
    },
    NavLink {
        label: "Resources",
        path: "/about",
        has_dropdown: true,
    },
];

pub const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        label: "About Us",
        path: "/about",
    },
    ResourceLink {
        label: "Contact",
        path: "/contact",
    },
    ResourceLink {
        label: "AI Skin Advisor",
        path: "/skin-advisor",
    },
];

impl NavLink {
    /// Whether this link should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(self.path, current_path)
    }
}

/// Active-link rule: exact string equality, no prefix matching.
///
/// ```rust
/// use shared::nav::is_active;
///
/// assert!(is_active("/products", "/products"));
/// assert!(!is_active("/products", "/products/42"));
/// assert!(!is_active("/products", "/"));
/// ```
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
}

/// The dropdown trigger entry, if the table has one.
pub fn dropdown_link() -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.has_dropdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(current_path: &str) -> Vec<&'static str> {
        NAV_LINKS
            .iter()
            .filter(|link| link.is_active(current_path))
            .map(|link| link.label)
            .collect()
    }

    #[test]
    fn test_products_path_marks_only_products() {
        assert_eq!(active_labels("/products"), vec!["Products"]);
    }

    #[test]
    fn test_about_path_marks_resources() {
        assert_eq!(active_labels("/about"), vec!["Resources"]);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_labels("/products/serum").is_empty());
        assert!(active_labels("/").is_empty());
        assert!(active_labels("/plans/").is_empty());
    }

    #[test]
    fn test_tables_shape() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Products", "Plans", "Resources"]);

        let paths: Vec<_> = RESOURCE_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/about", "/contact", "/skin-advisor"]);
    }

    #[test]
    fn test_single_dropdown_entry() {
        assert_eq!(NAV_LINKS.iter().filter(|l| l.has_dropdown).count(), 1);
        assert_eq!(dropdown_link().map(|l| l.label), Some("Resources"));
    }
}
