use dioxus::prelude::*;

use crate::tools::generator::GeneratorView;

#[component]
pub fn RandomGenerator() -> Element {
    rsx! {
        section { class: "page page-generator",
            h1 { "Random String Generator" }
            GeneratorView {}
        }
    }
}
