use dioxus::prelude::*;

use crate::tools::translator::TranslatorView;

#[component]
pub fn Translator() -> Element {
    rsx! {
        section { class: "page page-translator",
            h1 { "Text Translator" }
            TranslatorView {}
        }
    }
}
