#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::tools::translator::{MockTranslator, Translator as TranslationBackend};
use ui::views::{Landing, RandomGenerator, Translator};
use ui::AppSettings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/translator")]
    Translator {},
    #[route("/random-generator")]
    RandomGenerator {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Text Tools - v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1100.0, 820.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_translator(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Translator {}, "{label}" })
}
fn nav_generator(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::RandomGenerator {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        translator: nav_translator,
        generator: nav_generator,
    });

    // Settings are read once from the platform config dir (defaults if absent).
    let settings = use_context_provider(AppSettings::load);
    let delay_ms = settings.mock_translation_delay_ms;
    use_context_provider(move || Rc::new(MockTranslator::new(delay_ms)) as Rc<dyn TranslationBackend>);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Landing {
            translator_link: rsx! {
                Link { class: "button button--primary", to: Route::Translator {}, "Start Translating" }
            },
            generator_link: rsx! {
                Link { class: "button button--accent", to: Route::RandomGenerator {}, "Generate Strings" }
            },
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
