use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

pub const NAV_HOME_LABEL: &str = "Home";
pub const NAV_TRANSLATOR_LABEL: &str = "Translator";
pub const NAV_GENERATOR_LABEL: &str = "Random Generator";

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the label and returns a `Link` that already contains
/// it as its only child:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         translator: |label| rsx!( Link { class: "navbar__link", to: Route::Translator {}, "{label}" } ),
///         generator: |label| rsx!( Link { class: "navbar__link", to: Route::RandomGenerator {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder, `AppNavbar` renders whatever `children` it was
/// given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub translator: fn(label: &str) -> Element,
    pub generator: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform's navigation links. Only the first call has an effect.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(NAV_HOME_LABEL);
        let translator = (b.translator)(NAV_TRANSLATOR_LABEL);
        let generator = (b.generator)(NAV_GENERATOR_LABEL);

        rsx! {
            nav { class: "navbar__links",
                {home}
                {translator}
                {generator}
            }
        }
    });

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Text Tools App" }
                    }
                    span { class: "navbar__brand-subtitle", "Translate and generate text" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
