use dioxus::prelude::*;

/// Full-viewport overlay with an indeterminate spinner, shown while the
/// analysis request is in flight.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "cm-loading-overlay",
            div { class: "cm-loading-content",
                div { class: "cm-spinner" }
                p { class: "cm-loading-text", "Analyzing…" }
            }
        }
    }
}
