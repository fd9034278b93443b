use dioxus::prelude::*;

use crate::domain::models::ScrollPosition;

/// Live vertical scroll offset of the window.
///
/// Starts at the top so server and client render the same markup; the first
/// scroll event brings it up to date.
pub fn use_window_scroll() -> Signal<ScrollPosition> {
    #[allow(unused_mut)]
    let mut position = use_signal(ScrollPosition::default);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::shared::dom::EventListener;
        use std::rc::Rc;

        use_hook(move || {
            let listener = web_sys::window().and_then(|window| {
                let target: web_sys::EventTarget = window.clone().into();
                EventListener::new(&target, "scroll", move |_| {
                    let y = window.scroll_y().unwrap_or(0.0);
                    position.set(ScrollPosition::new(y));
                })
                .map_err(|e| tracing::warn!("Failed to listen for scroll events: {}", e))
                .ok()
            });
            Rc::new(listener)
        });
    }

    position
}
