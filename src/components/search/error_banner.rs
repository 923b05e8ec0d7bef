use dioxus::prelude::*;

/// Error banner for a failed search.
///
/// The message has already been through [`crate::error::ApiError::user_message`],
/// so connection-level failures arrive here as the generic connection text
/// rather than raw transport errors.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "cm-error-banner",
            span { class: "cm-error-icon", "✕" }
            p { class: "cm-error-text", "{message}" }
        }
    }
}
