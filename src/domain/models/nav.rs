use serde::{Deserialize, Serialize};

/// Vertical scroll offset of the page, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ScrollPosition(f64);

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition(0.0);

    /// Clamp a raw `scrollY` reading. Overscroll bounce reports negative
    /// offsets on some browsers; those count as the top of the page.
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            ScrollPosition(raw)
        } else {
            ScrollPosition::TOP
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_top(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for ScrollPosition {
    fn from(raw: f64) -> Self {
        ScrollPosition::new(raw)
    }
}

/// Show/hide state of the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Result of feeding one scroll reading through the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub visibility: Visibility,
    pub floating: bool,
}

/// Pure visibility transition.
///
/// - at the top: visible, not floating
/// - moving down: hidden
/// - moving up: visible
/// - no delta: visibility unchanged
///
/// Anywhere but the top the bar floats, whatever its visibility.
pub fn transition(
    previous: ScrollPosition,
    current: ScrollPosition,
    visibility: Visibility,
) -> Transition {
    if current.is_top() {
        return Transition {
            visibility: Visibility::Visible,
            floating: false,
        };
    }

    let visibility = if current > previous {
        Visibility::Hidden
    } else if current < previous {
        Visibility::Visible
    } else {
        visibility
    };

    Transition {
        visibility,
        floating: true,
    }
}

/// Navigation bar state tracked across scroll events
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub visibility: Visibility,
    pub floating: bool,
    pub last_position: ScrollPosition,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a scroll reading and remember it as the new previous position
    pub fn on_scroll(self, current: impl Into<ScrollPosition>) -> NavState {
        let current = current.into();
        let Transition { visibility, floating } =
            transition(self.last_position, current, self.visibility);

        NavState {
            visibility,
            floating,
            last_position: current,
        }
    }

    /// CSS classes for the nav container
    pub fn container_class(&self) -> &'static str {
        if self.floating {
            "c-nav floating-nav"
        } else {
            "c-nav"
        }
    }
}
