use dioxus::prelude::*;

use crate::domain::models::TabVisibility;

/// Visibility of the tab right now; a page can be opened straight into a
/// background tab, so the signal is seeded from this rather than assumed.
#[cfg(target_arch = "wasm32")]
fn current_tab_visibility() -> TabVisibility {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| TabVisibility::from_hidden(document.hidden()))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_tab_visibility() -> TabVisibility {
    TabVisibility::Visible
}

/// Foreground/background state of the browser tab
pub fn use_tab_visibility() -> Signal<TabVisibility> {
    #[allow(unused_mut)]
    let mut tab = use_signal(current_tab_visibility);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::shared::dom::EventListener;
        use crate::shared::logging::log_tab_visibility;
        use std::rc::Rc;

        use_hook(move || {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| {
                    let target: web_sys::EventTarget = document.clone().into();
                    EventListener::new(&target, "visibilitychange", move |_| {
                        let next = TabVisibility::from_hidden(document.hidden());
                        log_tab_visibility(next);
                        tab.set(next);
                    })
                    .map_err(|e| tracing::warn!("Failed to listen for visibilitychange: {}", e))
                    .ok()
                });
            Rc::new(listener)
        });
    }

    tab
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_document_reads_as_visible() {
        assert_eq!(current_tab_visibility(), TabVisibility::Visible);
    }
}
