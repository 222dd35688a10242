//! Input bindings
//!
//! Maps raw page input onto game actions. Both jump triggers lead to the
//! same action; repeated triggers are absorbed by the jump precondition.

use super::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    /// Start a new run (only honored after game over)
    Restart,
    /// Idle/demo mode - the autopilot plays
    ToggleAutopilot,
}

impl InputAction {
    /// Whether the key's default page behavior (scrolling for Space)
    /// should be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, InputAction::Jump)
    }
}

/// Action for a `KeyboardEvent.code`
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "Space" => Some(InputAction::Jump),
        "KeyI" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

/// Action for a click on one of the game's controls
pub fn action_for_click(element: Element) -> Option<InputAction> {
    match element {
        Element::JumpButton => Some(InputAction::Jump),
        Element::RestartButton => Some(InputAction::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_button_both_jump() {
        assert_eq!(action_for_key("Space"), Some(InputAction::Jump));
        assert_eq!(action_for_click(Element::JumpButton), Some(InputAction::Jump));
        assert!(InputAction::Jump.suppresses_default());
    }

    #[test]
    fn test_restart_button() {
        assert_eq!(action_for_click(Element::RestartButton), Some(InputAction::Restart));
        assert!(!InputAction::Restart.suppresses_default());
    }

    #[test]
    fn test_unbound_input() {
        assert_eq!(action_for_key("KeyA"), None);
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_click(Element::Score), None);
    }
}
