//! Shared UI crate for Text Tools. Views, tool engines and platform glue live
//! here; the launcher crates only own their `Route` enums.

use dioxus::prelude::*;

pub mod core;
pub mod tools;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use core::settings::AppSettings;

/// Shared theme stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
