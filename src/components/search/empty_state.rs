use dioxus::prelude::*;

/// Empty state shown before the first search
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        section { class: "cm-empty-state",
            div { class: "cm-empty-icon", "🔍" }
            p { class: "cm-empty-text",
                "Enter a movie title to discover similar films"
            }
        }
    }
}
