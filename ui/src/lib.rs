//! Shared UI crate for MindFuse. Report generation and all views live here.

pub mod core;
pub mod emotion;
pub mod report;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::nav_link;
    pub use app_navbar::NavTarget;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod footer;
    pub use footer::Footer;
}

/// Shared theme, embedded so every platform styles identically.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
