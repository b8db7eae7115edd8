use dioxus::prelude::*;

/// Landing page. Platforms pass their own `Link`s for the two tool cards since
/// `ui` does not know their `Route` enums.
#[component]
pub fn Landing(translator_link: Element, generator_link: Element) -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Welcome to Text Tools App" }
            p { class: "page-home__tagline",
                "Your one-stop solution for text translation and random string generation"
            }

            div { class: "page-home__cards",
                div { class: "page-home__card",
                    h3 { "Text Translator" }
                    p { "Translate English text to your favorite language." }
                    {translator_link}
                }
                div { class: "page-home__card",
                    h3 { "Random String Generator" }
                    p { "Generate random strings with customizable length and character sets." }
                    {generator_link}
                }
            }
        }
    }
}
