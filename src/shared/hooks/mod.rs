// Custom Dioxus hooks
pub mod use_window_scroll;
pub mod use_tab_visibility;
pub mod use_nav_state;
pub mod use_audio_toggle;

pub use use_window_scroll::use_window_scroll;
pub use use_tab_visibility::use_tab_visibility;
pub use use_nav_state::use_nav_state;
pub use use_audio_toggle::{use_audio_toggle, UseAudioToggleReturn};
