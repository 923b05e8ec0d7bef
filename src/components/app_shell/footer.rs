use dioxus::prelude::*;

/// Footer with attribution line
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "cm-footer",
            span { class: "cm-footer-text",
                "Similarity and ranking computed by the CinemaMatch analysis service."
            }
        }
    }
}
