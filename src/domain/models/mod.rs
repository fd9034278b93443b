// Domain models (UI state machines)
// Pure Rust, no framework dependencies

pub mod nav;
pub mod audio;
pub mod menu;
pub mod animation;

pub use nav::{NavState, ScrollPosition, Transition, Visibility, transition};
pub use audio::{AudioState, AudioToggle, PlaybackCommand, TabVisibility};
pub use menu::MenuState;
pub use animation::NavTween;
