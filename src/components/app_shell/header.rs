use dioxus::prelude::*;

/// Page header with product branding and tagline
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "cm-header",
            h1 { class: "cm-header-title", "CinemaMatch" }
            p { class: "cm-header-tagline",
                "Discover your perfect movie matches through our advanced AI recommendations"
            }
        }
    }
}
