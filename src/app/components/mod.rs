pub mod button;
pub mod audio_indicator;
pub mod menu_toggle;

pub use button::Button;
pub use audio_indicator::{AudioIndicator, AUDIO_ELEMENT_ID};
pub use menu_toggle::MenuToggle;
