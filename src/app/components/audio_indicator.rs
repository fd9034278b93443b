use dioxus::prelude::*;

use crate::shared::hooks::use_audio_toggle;

/// Id of the looping background track
pub const AUDIO_ELEMENT_ID: &str = "nav-audio";

const BAR_COUNT: u32 = 4;

fn bar_delay(bar: u32) -> String {
    format!("animation-delay: {:.1}s", bar as f64 * 0.1)
}

/// Audio toggle rendered as four animated bars
#[component]
pub fn AudioIndicator(src: String) -> Element {
    let mut audio = use_audio_toggle(AUDIO_ELEMENT_ID);

    let playing = audio.is_playing();
    let bar_class = audio.indicator_class();
    let label = if playing { "Pause music" } else { "Play music" };

    rsx! {
        button {
            class: "c-audio-toggle",
            aria_label: "{label}",
            aria_pressed: "{playing}",
            onclick: move |_| audio.toggle(),

            audio {
                id: AUDIO_ELEMENT_ID,
                class: "hidden",
                src: "{src}",
                r#loop: true,
                preload: "none",
            }

            for bar in 1..=BAR_COUNT {
                div {
                    key: "{bar}",
                    class: "{bar_class}",
                    style: bar_delay(bar),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_delays_are_staggered() {
        let delays: Vec<String> = (1..=BAR_COUNT).map(bar_delay).collect();
        assert_eq!(
            delays,
            vec![
                "animation-delay: 0.1s",
                "animation-delay: 0.2s",
                "animation-delay: 0.3s",
                "animation-delay: 0.4s",
            ]
        );
    }
}
