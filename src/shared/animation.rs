//! Tweening through the browser's Web Animations API

use crate::domain::models::NavTween;

/// Script animating `element_id` towards `tween`. `fill: 'forwards'` keeps
/// the end state; a newer animation on the same element replaces it.
pub fn animation_script(element_id: &str, tween: &NavTween) -> String {
    format!(
        r#"
        (function() {{
            const el = document.getElementById('{id}');
            if (!el) return;
            el.animate(
                [{{ transform: '{transform}', opacity: {opacity} }}],
                {{ duration: {duration}, fill: 'forwards', easing: 'ease-out' }}
            );
        }})()
    "#,
        id = element_id,
        transform = tween.transform(),
        opacity = tween.opacity,
        duration = tween.duration_ms(),
    )
}

/// Fire-and-forget animation of the nav container
#[cfg(target_arch = "wasm32")]
pub async fn animate(element_id: &str, tween: NavTween) {
    let script = animation_script(element_id, &tween);
    if let Err(e) = dioxus::document::eval(&script).await {
        crate::shared::logging::log_animation_error(element_id, &format!("{:?}", e));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn animate(_element_id: &str, _tween: NavTween) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Visibility;

    #[test]
    fn test_script_targets_element_and_values() {
        let tween = NavTween::for_visibility(Visibility::Hidden, NavTween::DEFAULT_DURATION);
        let script = animation_script("nav-container", &tween);

        assert!(script.contains("getElementById('nav-container')"));
        assert!(script.contains("translateY(-100px)"));
        assert!(script.contains("opacity: 0"));
        assert!(script.contains("duration: 200"));
    }
}
