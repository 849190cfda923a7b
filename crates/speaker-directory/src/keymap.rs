//! Keybindings
//!
//! Maps key presses to commands, and commands to actions. Key patterns are
//! textual ("j", "down", "ctrl+c").

use crate::actions::{Action, GlobalAction, SpeakerAction, ViewAction};
use crate::state::{AppState, SpeakerList};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for, independent of the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectNext,
    SelectPrevious,
    ToggleFavorite,
    ToggleSaturday,
    ToggleSunday,
    Quit,
}

impl Command {
    /// Resolve into an action against the presented list
    ///
    /// `ToggleFavorite` needs a selected record; with nothing visible it
    /// resolves to nothing.
    pub fn to_action(self, state: &AppState, visible: &SpeakerList) -> Option<Action> {
        let action = match self {
            Command::SelectNext => Action::View(ViewAction::SelectNext {
                visible: visible.len(),
            }),
            Command::SelectPrevious => Action::View(ViewAction::SelectPrevious),
            Command::ToggleFavorite => {
                let record = visible.get(state.ui.selected)?;
                Action::Speaker(SpeakerAction::ToggleFavorite(record.as_ref().clone()))
            }
            Command::ToggleSaturday => Action::View(ViewAction::ToggleSaturday),
            Command::ToggleSunday => Action::View(ViewAction::ToggleSunday),
            Command::Quit => Action::Global(GlobalAction::Quit),
        };
        Some(action)
    }
}

/// A single keybinding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// e.g. "j", "down", "ctrl+c"
    pub keys: String,
    pub command: Command,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, command: Command) -> Self {
        Self {
            keys: keys.into(),
            command,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        parse_key_pattern(&self.keys)
            .map(|(code, modifiers)| {
                key.code == code && key.modifiers.difference(KeyModifiers::SHIFT) == modifiers
            })
            .unwrap_or(false)
    }
}

/// Parse "q", "down", "ctrl+c" into a key code and required modifiers
///
/// Shift is never required: uppercase characters carry it already.
pub fn parse_key_pattern(pattern: &str) -> Option<(KeyCode, KeyModifiers)> {
    let pattern = pattern.trim();
    let (modifiers, key) = match pattern.rsplit_once('+') {
        Some((prefix, key)) if !key.is_empty() => {
            let mut modifiers = KeyModifiers::NONE;
            for part in prefix.split('+') {
                match part.to_lowercase().as_str() {
                    "ctrl" => modifiers |= KeyModifiers::CONTROL,
                    "alt" => modifiers |= KeyModifiers::ALT,
                    _ => return None,
                }
            }
            (modifiers, key)
        }
        _ => (KeyModifiers::NONE, pattern),
    };

    let mut chars = key.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            _ => return None,
        },
    };
    Some((code, modifiers))
}

/// Collection of keybindings
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// First binding matching the key press
    pub fn command_for(&self, key: &KeyEvent) -> Option<Command> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.command)
    }
}

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use Command::*;

    Keymap::new(vec![
        // Navigation
        KeyBinding::new("j", SelectNext),
        KeyBinding::new("down", SelectNext),
        KeyBinding::new("k", SelectPrevious),
        KeyBinding::new("up", SelectPrevious),
        // Favorites
        KeyBinding::new("f", ToggleFavorite),
        KeyBinding::new("space", ToggleFavorite),
        KeyBinding::new("enter", ToggleFavorite),
        // Day filters
        KeyBinding::new("s", ToggleSaturday),
        KeyBinding::new("u", ToggleSunday),
        // General
        KeyBinding::new("q", Quit),
        KeyBinding::new("esc", Quit),
        KeyBinding::new("ctrl+c", Quit),
    ])
}
