use std::time::Duration;

use super::nav::Visibility;

/// Slide/fade target for the nav container, in the units the animation
/// collaborator expects (pixels, 0..1 opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavTween {
    pub translate_y: f64,
    pub opacity: f64,
    pub duration: Duration,
}

impl NavTween {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);
    pub const HIDDEN_OFFSET: f64 = -100.0;

    pub fn for_visibility(visibility: Visibility, duration: Duration) -> Self {
        match visibility {
            Visibility::Visible => NavTween {
                translate_y: 0.0,
                opacity: 1.0,
                duration,
            },
            Visibility::Hidden => NavTween {
                translate_y: Self::HIDDEN_OFFSET,
                opacity: 0.0,
                duration,
            },
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }

    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_target() {
        let tween = NavTween::for_visibility(Visibility::Visible, NavTween::DEFAULT_DURATION);
        assert_eq!(tween.translate_y, 0.0);
        assert_eq!(tween.opacity, 1.0);
        assert_eq!(tween.duration_ms(), 200);
        assert_eq!(tween.transform(), "translateY(0px)");
    }

    #[test]
    fn test_hidden_target() {
        let tween = NavTween::for_visibility(Visibility::Hidden, Duration::from_millis(350));
        assert_eq!(tween.translate_y, -100.0);
        assert_eq!(tween.opacity, 0.0);
        assert_eq!(tween.duration_ms(), 350);
        assert_eq!(tween.transform(), "translateY(-100px)");
    }
}
