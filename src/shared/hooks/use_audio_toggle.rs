use dioxus::prelude::*;

use super::use_tab_visibility;
use crate::domain::models::AudioToggle;
use crate::shared::media;

/// Handle returned by [`use_audio_toggle`]
#[derive(Clone, Copy, PartialEq)]
pub struct UseAudioToggleReturn {
    toggle: Signal<AudioToggle>,
    element_id: &'static str,
}

impl UseAudioToggleReturn {
    pub fn is_playing(&self) -> bool {
        self.toggle.read().is_playing()
    }

    pub fn indicator_class(&self) -> &'static str {
        self.toggle.read().indicator_class()
    }

    /// Flip the logical state and drive the audio element to match
    pub fn toggle(&mut self) {
        let command = self.toggle.write().toggle();
        media::issue(command, self.element_id);
    }
}

/// Audio toggle bound to the `<audio>` element with id `element_id`.
///
/// Also follows the tab's visibility: playback pauses while the tab is in
/// the background and resumes on return if the user had it playing.
pub fn use_audio_toggle(element_id: &'static str) -> UseAudioToggleReturn {
    let toggle = use_signal(AudioToggle::new);
    let tab = use_tab_visibility();

    use_effect(move || {
        let tab = tab();
        if let Some(command) = toggle.peek().on_tab_visibility(tab) {
            media::issue(command, element_id);
        }
    });

    UseAudioToggleReturn { toggle, element_id }
}
