//! Shared UI crate for the site. Everything except launching and routing
//! lives here so the web and desktop shells render the same pages.

use dioxus::prelude::*;

pub mod config;
pub mod core;
pub mod i18n;
pub mod providers;
pub mod views;

pub mod components {
    mod container;
    pub use container::{frame_class, Container};

    mod footer;
    pub use footer::Footer;

    mod nav_links;
    pub use nav_links::NavLinks;

    mod navbar;
    pub use navbar::Navbar;

    mod site_head;
    pub use site_head::SiteHead;

    mod theme_toggle;
    pub use theme_toggle::ThemeToggle;
}

/// Global stylesheet shared by every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
