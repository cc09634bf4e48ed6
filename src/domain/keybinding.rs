use crossterm::event::KeyEvent;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Back,
    Select,
    Retry,

    // Navigation / Focus
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    FocusNext,
    FocusSearch,
    ClearSearch,

    // Preferences
    ToggleTheme,
    ToggleLanguage,

    // Resources
    OpenLink,
    Download,
    Translate,
    CloseModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
