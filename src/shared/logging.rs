//! Structured logging for the landing site
//!
//! Every UI event that changes state goes through one of these helpers so the
//! `operation` field stays consistent between server logs and the browser
//! console.

use crate::domain::models::{
    MenuState, NavState, PlaybackCommand, TabVisibility, Visibility,
};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    NavTransition,
    AudioCommand,
    TabVisibility,
    MenuToggle,
    Animation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::NavTransition => "nav_transition",
            LogOperation::AudioCommand => "audio_command",
            LogOperation::TabVisibility => "tab_visibility",
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::Animation => "animation",
            LogOperation::Config => "config",
        }
    }
}

/// Log a visibility change of the navigation bar
pub fn log_nav_transition(from: Visibility, to: &NavState) {
    tracing::debug!(
        operation = LogOperation::NavTransition.as_str(),
        from = from.as_str(),
        to = to.visibility.as_str(),
        floating = to.floating,
        scroll_y = to.last_position.value(),
        "Navbar visibility changed"
    );
}

/// Log a play/pause command reaching the audio element
pub fn log_audio_command(command: PlaybackCommand, element_id: &str) {
    tracing::debug!(
        operation = LogOperation::AudioCommand.as_str(),
        command = command.as_str(),
        element_id = element_id,
        "Audio command issued"
    );
}

/// Log a command dropped because the audio element is not mounted
pub fn log_audio_unavailable(command: PlaybackCommand) {
    tracing::debug!(
        operation = LogOperation::AudioCommand.as_str(),
        command = command.as_str(),
        "Audio element not mounted, command skipped"
    );
}

/// Log a playback failure reported by the browser (autoplay policy, decode error)
pub fn log_audio_error(command: PlaybackCommand, error: &str) {
    tracing::warn!(
        operation = LogOperation::AudioCommand.as_str(),
        command = command.as_str(),
        error = error,
        "Audio command rejected"
    );
}

pub fn log_tab_visibility(tab: TabVisibility) {
    tracing::debug!(
        operation = LogOperation::TabVisibility.as_str(),
        tab = tab.as_str(),
        "Tab visibility changed"
    );
}

pub fn log_menu_toggle(state: MenuState) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        menu = state.as_str(),
        "Mobile menu toggled"
    );
}

/// Log a tween the browser refused to run
pub fn log_animation_error(element_id: &str, error: &str) {
    tracing::debug!(
        operation = LogOperation::Animation.as_str(),
        element_id = element_id,
        error = error,
        "Animation script failed"
    );
}

/// Log an embedded configuration that failed to parse
pub fn log_config_fallback(error: &str) {
    tracing::error!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid site configuration, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::NavTransition.as_str(), "nav_transition");
        assert_eq!(LogOperation::AudioCommand.as_str(), "audio_command");
        assert_eq!(LogOperation::TabVisibility.as_str(), "tab_visibility");
        assert_eq!(LogOperation::MenuToggle.as_str(), "menu_toggle");
        assert_eq!(LogOperation::Animation.as_str(), "animation");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}
