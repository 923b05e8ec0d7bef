//! Viewport width observation for responsive layout.
//!
//! Purely a layout concern: the search form stacks vertically below the
//! breakpoint. Resize handling is independent of the search operation, so the
//! view stays responsive to layout events while a request is outstanding.

use dioxus::prelude::*;

/// Below this width the search form switches to the stacked layout.
pub const COMPACT_BREAKPOINT: f64 = 640.0;

/// Width reported on platforms without a browser window (desktop webview
/// before first resize, tests).
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Track the viewport width across browser resize events.
///
/// On WASM this subscribes to the window `resize` event for the lifetime of
/// the app; elsewhere it returns a fixed default and never updates.
pub fn use_viewport_width() -> Signal<f64> {
    let width = use_signal(initial_width);

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_events::EventListener;

            let mut width_signal = width;
            if let Some(window) = web_sys::window() {
                let target = window.clone();
                let listener = EventListener::new(&window, "resize", move |_| {
                    let w = target
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
                    width_signal.set(w);
                });
                // App-lifetime listener; never unsubscribed
                listener.forget();
            }
        }
    });

    width
}

fn initial_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_VIEWPORT_WIDTH
    }
}
