//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action
//! types, hotkey bindings, and the default bindings per input context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Global actions
    NextTab,
    PreviousTab,
    GoHome,
    GoVideos,
    GoArticles,
    GoChat,
    GoSettings,
    GoMyths,
    ToggleLog,
    Quit,

    // Home page actions
    TileUp,
    TileDown,
    TileLeft,
    TileRight,
    OpenTile,

    // Chat page and composer actions
    FocusComposer,
    SendMessage,
    LeaveComposer,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => {
                if let Some(c) = helper.char {
                    KeyCode::Char(c)
                } else {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ));
                }
            }
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Input contexts that carry their own bindings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyContext {
    Global,
    Home,
    Chat,
    Composer,
}

/// Maps hotkey actions to their key bindings for each input context.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkeys {
    #[serde(default = "default_global")]
    pub global: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_home")]
    pub home: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_chat")]
    pub chat: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_composer")]
    pub composer: HashMap<HotkeyAction, Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl Hotkeys {
    fn for_context(&self, context: HotkeyContext) -> &HashMap<HotkeyAction, Hotkey> {
        match context {
            HotkeyContext::Global => &self.global,
            HotkeyContext::Home => &self.home,
            HotkeyContext::Chat => &self.chat,
            HotkeyContext::Composer => &self.composer,
        }
    }

    /// Gets the action for a KeyEvent in a specific context.
    ///
    pub fn action_for(&self, event: &KeyEvent, context: HotkeyContext) -> Option<HotkeyAction> {
        self.for_context(context)
            .iter()
            .find(|(_, hotkey)| matches_hotkey(event, hotkey))
            .map(|(action, _)| *action)
    }

    /// Return the binding of `action` in `context`, if any.
    ///
    pub fn binding(&self, action: HotkeyAction, context: HotkeyContext) -> Option<&Hotkey> {
        self.for_context(context).get(&action)
    }
}

fn default_global() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::NextTab, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::PreviousTab,
            Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            },
        ),
        (HotkeyAction::GoHome, Hotkey::char('1')),
        (HotkeyAction::GoVideos, Hotkey::char('2')),
        (HotkeyAction::GoArticles, Hotkey::char('3')),
        (HotkeyAction::GoChat, Hotkey::char('4')),
        (HotkeyAction::GoSettings, Hotkey::char('5')),
        (HotkeyAction::GoMyths, Hotkey::char('6')),
        (HotkeyAction::ToggleLog, Hotkey::char('d')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ])
}

fn default_home() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::TileUp, Hotkey::plain(KeyCode::Up)),
        (HotkeyAction::TileDown, Hotkey::plain(KeyCode::Down)),
        (HotkeyAction::TileLeft, Hotkey::plain(KeyCode::Left)),
        (HotkeyAction::TileRight, Hotkey::plain(KeyCode::Right)),
        (HotkeyAction::OpenTile, Hotkey::plain(KeyCode::Enter)),
    ])
}

fn default_chat() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::FocusComposer, Hotkey::char('i')),
        (HotkeyAction::SendMessage, Hotkey::plain(KeyCode::Enter)),
    ])
}

fn default_composer() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::SendMessage, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::LeaveComposer, Hotkey::plain(KeyCode::Esc)),
    ])
}

/// Returns default hotkey mappings for all contexts.
///
pub fn default_hotkeys() -> Hotkeys {
    Hotkeys {
        global: default_global(),
        home: default_home(),
        chat: default_chat(),
        composer: default_composer(),
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Builds a footer text string from hotkey bindings.
///
pub fn build_footer_text(hotkeys: &Hotkeys, actions: &[(HotkeyAction, HotkeyContext, &str)]) -> String {
    actions
        .iter()
        .filter_map(|(action, context, description)| {
            hotkeys
                .binding(*action, *context)
                .map(|hotkey| format!(" {}: {}", format_hotkey_display(hotkey), description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) && hotkey.code != KeyCode::BackTab {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('q');
        assert!(matches_hotkey(
            &key(KeyCode::Char('q'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('w'), KeyModifiers::empty()),
            &hotkey
        ));
    }

    #[test]
    fn test_action_for_event_per_context() {
        let hotkeys = default_hotkeys();
        let enter = key(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            hotkeys.action_for(&enter, HotkeyContext::Home),
            Some(HotkeyAction::OpenTile)
        );
        assert_eq!(
            hotkeys.action_for(&enter, HotkeyContext::Composer),
            Some(HotkeyAction::SendMessage)
        );
        assert_eq!(hotkeys.action_for(&enter, HotkeyContext::Global), None);

        let back_tab = key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            hotkeys.action_for(&back_tab, HotkeyContext::Global),
            Some(HotkeyAction::PreviousTab)
        );
    }

    #[test]
    fn test_default_hotkeys() {
        let hotkeys = default_hotkeys();
        assert!(!hotkeys.global.is_empty());
        assert!(!hotkeys.home.is_empty());
        assert!(!hotkeys.chat.is_empty());
        assert!(!hotkeys.composer.is_empty());
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::char('j');
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let hotkey = Hotkey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        };
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_requires_char_field() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_hotkeys_fill_defaults() {
        let yaml = "global:\n  quit:\n    code: Char\n    char: x\n";
        let hotkeys: Hotkeys = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hotkeys.global.len(), 1);
        assert_eq!(
            hotkeys.binding(HotkeyAction::Quit, HotkeyContext::Global),
            Some(&Hotkey::char('x'))
        );
        assert_eq!(hotkeys.home, default_hotkeys().home);
    }

    #[test]
    fn test_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys,
            &[
                (HotkeyAction::NextTab, HotkeyContext::Global, "next tab"),
                (HotkeyAction::Quit, HotkeyContext::Global, "quit"),
                (HotkeyAction::OpenTile, HotkeyContext::Global, "missing"),
            ],
        );
        assert_eq!(text, " Tab: next tab, q: quit");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::char(' ')), "Space");
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            "Ctrl+c"
        );
        assert_eq!(
            format_hotkey_display(&Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            }),
            "Shift+Tab"
        );
    }
}
