use std::time::Duration;

use dioxus::prelude::*;

use super::use_window_scroll;
use crate::domain::models::{NavState, NavTween};
use crate::shared::animation::animate;
use crate::shared::logging::log_nav_transition;

/// Scroll-driven navbar state.
///
/// Every scroll reading goes through `NavState::on_scroll`; whenever the
/// visibility flips, the container identified by `container_id` is tweened
/// towards the matching `NavTween`.
pub fn use_nav_state(container_id: &'static str, duration: Duration) -> Signal<NavState> {
    let scroll = use_window_scroll();
    let mut nav = use_signal(NavState::new);

    use_effect(move || {
        let position = scroll();
        let current = *nav.peek();
        let next = current.on_scroll(position);

        if next.visibility != current.visibility {
            log_nav_transition(current.visibility, &next);
        }
        if next != current {
            nav.set(next);
        }
    });

    let visibility = use_memo(move || nav.read().visibility);

    use_effect(move || {
        let tween = NavTween::for_visibility(visibility(), duration);
        spawn(async move {
            animate(container_id, tween).await;
        });
    });

    nav
}
