//! UI components for the CinemaMatch application.
//!
//! This module contains all Dioxus components that make up the user interface.
//!
//! - `app_shell`: Header, Footer
//! - `search`: SearchView, SearchCard, ResultCard, QuerySummary, MedalBadge,
//!   LoadingOverlay, ErrorBanner, EmptyState
//! - `viewport`: viewport-width observation for responsive layout

mod app_shell;
pub mod search; // Public for SearchView re-export
mod viewport;

pub use app_shell::{Footer, Header};
pub use search::SearchView;
pub use viewport::{use_viewport_width, COMPACT_BREAKPOINT};

use dioxus::prelude::*;

/// Root component composing the app shell around the single view.
#[component]
pub fn App() -> Element {
    rsx! {
        div { class: "cm-app",
            Header {}

            main { class: "cm-main",
                SearchView {}
            }

            Footer {}
        }
    }
}
