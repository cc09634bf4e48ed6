use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );

        register(
            Action::CloseModal,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Back,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Back,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Select,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Select,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );
        register(
            Action::Retry,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            true,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateLeft,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateLeft,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateRight,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateRight,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusSearch,
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ClearSearch,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            true,
        );

        register(
            Action::ToggleTheme,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleLanguage,
            KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE),
            true,
        );
        register(
            Action::ToggleLanguage,
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
            false,
        );
        register(
            Action::ToggleLanguage,
            KeyEvent::new(KeyCode::Char('L'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::OpenLink,
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Download,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Translate,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Footer hint for `action`, if it has a primary key.
    #[must_use]
    pub fn keybind(&self, action: Action, label: impl Into<Cow<'static, str>>) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_keys_resolve_to_same_action() {
        let registry = CommandRegistry::new();

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::NavigateDown)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Some(Action::ToggleLanguage)
        );
    }

    #[test]
    fn test_escape_closes_modal_first() {
        let registry = CommandRegistry::new();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(registry.find_action(esc), Some(Action::CloseModal));
        assert_eq!(registry.get(Action::Back).map(|k| k.code), Some(KeyCode::Backspace));
    }

    #[test]
    fn test_unbound_key() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }
}
