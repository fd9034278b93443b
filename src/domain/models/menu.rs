use serde::{Deserialize, Serialize};

/// Mobile menu state, only shown below the layout breakpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(self) -> MenuState {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// Following any navigation link closes the menu
    pub fn on_link_activated(self) -> MenuState {
        MenuState::Closed
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuState::Open => "open",
            MenuState::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_link_activation_closes() {
        assert_eq!(MenuState::Open.on_link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.on_link_activated(), MenuState::Closed);
    }
}
