//! Playback commands against the page's audio element

use crate::domain::models::PlaybackCommand;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_audio_command, log_audio_error, log_audio_unavailable};

/// Anything that can start and stop playback
pub trait MediaSink {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;

    fn label(&self) -> &str {
        "audio"
    }
}

/// Send `command` to `sink`. A missing sink means the element is not mounted
/// yet (or we are rendering on the server): the command is dropped silently.
/// Returns whether the sink accepted the command.
pub fn dispatch<S: MediaSink + ?Sized>(command: PlaybackCommand, sink: Option<&mut S>) -> bool {
    let Some(sink) = sink else {
        log_audio_unavailable(command);
        return false;
    };

    let result = match command {
        PlaybackCommand::Play => sink.play(),
        PlaybackCommand::Pause => sink.pause(),
    };

    match result {
        Ok(()) => {
            log_audio_command(command, sink.label());
            true
        }
        Err(e) => {
            log_audio_error(command, &e.to_string());
            false
        }
    }
}

/// Look up the audio element by id and send it `command`
pub fn issue(command: PlaybackCommand, element_id: &str) -> bool {
    let mut audio = DomAudio::find(element_id).ok();
    dispatch(command, audio.as_mut())
}

/// `<audio>` element resolved from the document
#[cfg(target_arch = "wasm32")]
pub struct DomAudio {
    id: String,
    element: web_sys::HtmlMediaElement,
}

#[cfg(target_arch = "wasm32")]
impl DomAudio {
    pub fn find(id: &str) -> Result<Self> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Dom("no document".to_string()))?;

        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))?
            .dyn_into::<web_sys::HtmlMediaElement>()
            .map_err(|_| AppError::Dom(format!("#{} is not a media element", id)))?;

        Ok(Self {
            id: id.to_string(),
            element,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaSink for DomAudio {
    fn play(&mut self) -> Result<()> {
        let promise: js_sys::Promise = self.element.play()?;

        // Autoplay policies reject the promise asynchronously
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log_audio_error(PlaybackCommand::Play, &format!("{:?}", e));
            }
        });
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.element.pause()?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.id
    }
}

/// Server-side stand-in: there is never a mounted element to find
#[cfg(not(target_arch = "wasm32"))]
pub struct DomAudio;

#[cfg(not(target_arch = "wasm32"))]
impl DomAudio {
    pub fn find(id: &str) -> Result<Self> {
        Err(AppError::ElementNotFound(id.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaSink for DomAudio {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AudioState, AudioToggle, TabVisibility};

    #[derive(Default)]
    struct RecordingSink {
        issued: Vec<PlaybackCommand>,
        fail_play: bool,
    }

    impl MediaSink for RecordingSink {
        fn play(&mut self) -> Result<()> {
            if self.fail_play {
                return Err(AppError::Dom("NotAllowedError".to_string()));
            }
            self.issued.push(PlaybackCommand::Play);
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.issued.push(PlaybackCommand::Pause);
            Ok(())
        }
    }

    #[test]
    fn test_missing_sink_is_noop() {
        assert!(!dispatch::<RecordingSink>(PlaybackCommand::Play, None));
        assert!(!dispatch::<RecordingSink>(PlaybackCommand::Pause, None));
    }

    #[test]
    fn test_issue_without_document_is_noop() {
        assert!(matches!(DomAudio::find("nav-audio"), Err(AppError::ElementNotFound(_))));
        assert!(!issue(PlaybackCommand::Play, "nav-audio"));
    }

    #[test]
    fn test_double_toggle_issues_two_commands() {
        let mut sink = RecordingSink::default();
        let mut toggle = AudioToggle::new();

        dispatch(toggle.toggle(), Some(&mut sink));
        dispatch(toggle.toggle(), Some(&mut sink));

        assert_eq!(toggle.state(), AudioState::Paused);
        assert_eq!(sink.issued, vec![PlaybackCommand::Play, PlaybackCommand::Pause]);
    }

    #[test]
    fn test_tab_roundtrip_resumes_playing_audio() {
        let mut sink = RecordingSink::default();
        let mut toggle = AudioToggle::new();
        dispatch(toggle.toggle(), Some(&mut sink));

        for tab in [TabVisibility::Hidden, TabVisibility::Visible] {
            if let Some(command) = toggle.on_tab_visibility(tab) {
                dispatch(command, Some(&mut sink));
            }
        }

        assert_eq!(
            sink.issued,
            vec![PlaybackCommand::Play, PlaybackCommand::Pause, PlaybackCommand::Play]
        );
        assert!(toggle.is_playing());
    }

    #[test]
    fn test_tab_roundtrip_keeps_paused_audio_paused() {
        let mut sink = RecordingSink::default();
        let toggle = AudioToggle::new();

        for tab in [TabVisibility::Hidden, TabVisibility::Visible] {
            if let Some(command) = toggle.on_tab_visibility(tab) {
                dispatch(command, Some(&mut sink));
            }
        }

        assert_eq!(sink.issued, vec![PlaybackCommand::Pause]);
    }

    #[test]
    fn test_rejected_play_reports_false() {
        let mut sink = RecordingSink {
            fail_play: true,
            ..Default::default()
        };
        assert!(!dispatch(PlaybackCommand::Play, Some(&mut sink)));
        assert!(sink.issued.is_empty());
    }
}
