use serde::{Deserialize, Serialize};

/// Logical playback state chosen by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioState {
    Playing,
    #[default]
    Paused,
}

impl AudioState {
    pub fn is_playing(&self) -> bool {
        matches!(self, AudioState::Playing)
    }

    pub fn flipped(&self) -> AudioState {
        match self {
            AudioState::Playing => AudioState::Paused,
            AudioState::Paused => AudioState::Playing,
        }
    }
}

/// Command sent to the underlying playback primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

impl PlaybackCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackCommand::Play => "play",
            PlaybackCommand::Pause => "pause",
        }
    }
}

/// Whether the browser tab is in the foreground
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabVisibility {
    #[default]
    Visible,
    Hidden,
}

impl TabVisibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            TabVisibility::Hidden
        } else {
            TabVisibility::Visible
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabVisibility::Visible => "visible",
            TabVisibility::Hidden => "hidden",
        }
    }
}

/// Audio toggle behind the indicator button.
///
/// The indicator's active look is derived from `state`, there is no
/// separate flag to keep in sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioToggle {
    state: AudioState,
}

impl AudioToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AudioState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// User pressed the button
    pub fn toggle(&mut self) -> PlaybackCommand {
        self.state = self.state.flipped();
        self.command()
    }

    /// Command matching the current logical state
    pub fn command(&self) -> PlaybackCommand {
        match self.state {
            AudioState::Playing => PlaybackCommand::Play,
            AudioState::Paused => PlaybackCommand::Pause,
        }
    }

    /// Leaving the tab pauses playback, coming back resumes it only if the
    /// user had it playing. The logical state never changes here.
    pub fn on_tab_visibility(&self, tab: TabVisibility) -> Option<PlaybackCommand> {
        match tab {
            TabVisibility::Hidden => Some(PlaybackCommand::Pause),
            TabVisibility::Visible if self.is_playing() => Some(PlaybackCommand::Play),
            TabVisibility::Visible => None,
        }
    }

    pub fn indicator_class(&self) -> &'static str {
        if self.is_playing() {
            "indicator-line active"
        } else {
            "indicator-line"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused() {
        let toggle = AudioToggle::new();
        assert_eq!(toggle.state(), AudioState::Paused);
        assert_eq!(toggle.indicator_class(), "indicator-line");
    }

    #[test]
    fn test_toggle_twice_returns_to_paused() {
        let mut toggle = AudioToggle::new();
        let commands = [toggle.toggle(), toggle.toggle()];

        assert_eq!(commands, [PlaybackCommand::Play, PlaybackCommand::Pause]);
        assert_eq!(toggle.state(), AudioState::Paused);
    }

    #[test]
    fn test_indicator_follows_state() {
        let mut toggle = AudioToggle::new();
        for _ in 0..5 {
            toggle.toggle();
            assert_eq!(
                toggle.indicator_class().ends_with("active"),
                toggle.state() == AudioState::Playing
            );
        }
    }

    #[test]
    fn test_tab_hidden_pauses_without_touching_state() {
        let playing = AudioToggle::with_state(AudioState::Playing);
        assert_eq!(
            playing.on_tab_visibility(TabVisibility::Hidden),
            Some(PlaybackCommand::Pause)
        );
        assert_eq!(playing.state(), AudioState::Playing);

        let paused = AudioToggle::new();
        assert_eq!(
            paused.on_tab_visibility(TabVisibility::Hidden),
            Some(PlaybackCommand::Pause)
        );
    }

    #[test]
    fn test_tab_visible_resumes_only_when_playing() {
        let playing = AudioToggle::with_state(AudioState::Playing);
        assert_eq!(
            playing.on_tab_visibility(TabVisibility::Visible),
            Some(PlaybackCommand::Play)
        );

        let paused = AudioToggle::new();
        assert_eq!(paused.on_tab_visibility(TabVisibility::Visible), None);
    }

    #[test]
    fn test_tab_visibility_from_hidden() {
        assert_eq!(TabVisibility::from_hidden(true), TabVisibility::Hidden);
        assert_eq!(TabVisibility::from_hidden(false), TabVisibility::Visible);
    }
}
