use cinemamatch::components::App as CinemaMatchApp;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/cinemamatch.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    // Platform-specific launch configuration
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("CinemaMatch")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/cinemamatch.css")} }
        }

        body { class: "cm-body",
            CinemaMatchApp {}
        }
    }
}
