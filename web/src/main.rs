use std::rc::Rc;

use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::tools::translator::{MockTranslator, Translator as TranslationBackend};
use ui::views::{Landing, RandomGenerator, Translator};
use ui::AppSettings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/translator")]
    Translator {},
    #[route("/random-generator")]
    RandomGenerator {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_translator(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Translator {},
        "{label}"
    })
}
fn nav_generator(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RandomGenerator {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        translator: nav_translator,
        generator: nav_generator,
    });

    let settings = use_context_provider(AppSettings::load);
    let delay_ms = settings.mock_translation_delay_ms;
    use_context_provider(move || Rc::new(MockTranslator::new(delay_ms)) as Rc<dyn TranslationBackend>);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
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

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
