use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Format selection
    NextFormat,
    PrevFormat,
    SelectSimple,
    SelectQuoted,
    SelectTemplate,
    SelectMarkdown,

    // Output
    CopyOutput,

    // Buffer
    ClearInput,
    EnterInsertMode,

    // UI
    ToggleHelp,
    CloseHelp,
    Quit,

    // Insert mode specific
    InsertCancel,
    InsertNewline,
    InsertBackspace,
    InsertLeft,
    InsertRight,
    InsertUp,
    InsertDown,
    InsertHome,
    InsertEnd,
    InsertCopy,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::NextFormat => "next_format",
            Action::PrevFormat => "prev_format",
            Action::SelectSimple => "select_simple",
            Action::SelectQuoted => "select_quoted",
            Action::SelectTemplate => "select_template",
            Action::SelectMarkdown => "select_markdown",
            Action::CopyOutput => "copy_output",
            Action::ClearInput => "clear_input",
            Action::EnterInsertMode => "enter_insert_mode",
            Action::ToggleHelp => "toggle_help",
            Action::CloseHelp => "close_help",
            Action::Quit => "quit",
            Action::InsertCancel => "insert_cancel",
            Action::InsertNewline => "insert_newline",
            Action::InsertBackspace => "insert_backspace",
            Action::InsertLeft => "insert_left",
            Action::InsertRight => "insert_right",
            Action::InsertUp => "insert_up",
            Action::InsertDown => "insert_down",
            Action::InsertHome => "insert_home",
            Action::InsertEnd => "insert_end",
            Action::InsertCopy => "insert_copy",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next_format" => Ok(Action::NextFormat),
            "prev_format" => Ok(Action::PrevFormat),
            "select_simple" => Ok(Action::SelectSimple),
            "select_quoted" => Ok(Action::SelectQuoted),
            "select_template" => Ok(Action::SelectTemplate),
            "select_markdown" => Ok(Action::SelectMarkdown),
            "copy_output" => Ok(Action::CopyOutput),
            "clear_input" => Ok(Action::ClearInput),
            "enter_insert_mode" => Ok(Action::EnterInsertMode),
            "toggle_help" => Ok(Action::ToggleHelp),
            "close_help" => Ok(Action::CloseHelp),
            "quit" => Ok(Action::Quit),
            "insert_cancel" => Ok(Action::InsertCancel),
            "insert_newline" => Ok(Action::InsertNewline),
            "insert_backspace" => Ok(Action::InsertBackspace),
            "insert_left" => Ok(Action::InsertLeft),
            "insert_right" => Ok(Action::InsertRight),
            "insert_up" => Ok(Action::InsertUp),
            "insert_down" => Ok(Action::InsertDown),
            "insert_home" => Ok(Action::InsertHome),
            "insert_end" => Ok(Action::InsertEnd),
            "insert_copy" => Ok(Action::InsertCopy),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        // BackTab already implies Shift; drop the modifier so lookups match.
        let modifiers = if event.code == KeyCode::BackTab {
            event.modifiers - KeyModifiers::SHIFT
        } else {
            event.modifiers
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("A");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "S-Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "BS".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };

        parts.push(&key_str);

        if parts.len() > 1 || key_str.len() > 1 {
            write!(f, "<{}>", parts.join("-"))
        } else {
            write!(f, "{}", key_str)
        }
    }
}

/// Parse a key notation: "y", "?", "<Esc>", "<C-y>", "<BackTab>", etc.
impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with('<') && s.ends_with('>') {
            return parse_bracket_notation(&s[1..s.len() - 1]);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeyBinding::new(KeyCode::Char(c), KeyModifiers::NONE)),
            _ => Err(format!("Invalid key binding: {}", s)),
        }
    }
}

fn parse_bracket_notation(s: &str) -> Result<KeyBinding, String> {
    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = "";

    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            key_part = part;
        } else {
            match part.to_uppercase().as_str() {
                "C" | "CTRL" | "CONTROL" => modifiers |= KeyModifiers::CONTROL,
                "A" | "ALT" | "M" | "META" => modifiers |= KeyModifiers::ALT,
                "S" | "SHIFT" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let code = parse_key_code(key_part)?;

    Ok(KeyBinding::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let s_lower = s.to_lowercase();

    match s_lower.as_str() {
        "space" => Ok(KeyCode::Char(' ')),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "enter" | "return" | "cr" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "bs" | "backspace" => Ok(KeyCode::Backspace),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "del" | "delete" => Ok(KeyCode::Delete),
        s if s.starts_with('f') && s.len() > 1 => {
            let n: u8 = s[1..].parse().map_err(|_| format!("Invalid F key: {}", s))?;
            Ok(KeyCode::F(n))
        }
        s if s.chars().count() == 1 => {
            let c = s.chars().next().ok_or_else(|| "Empty key".to_string())?;
            Ok(KeyCode::Char(c))
        }
        _ => Err(format!("Unknown key: {}", s)),
    }
}

/// Per-mode key → action tables from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub navigate: HashMap<String, String>,
    #[serde(default)]
    pub insert: HashMap<String, String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl KeybindingsConfig {
    /// User entries layered over the built-in defaults. A user entry for an
    /// already-bound key replaces the default.
    pub fn merge_with_defaults(self) -> Self {
        let mut merged = Self::defaults();
        merged.navigate.extend(self.navigate);
        merged.insert.extend(self.insert);
        merged
    }

    pub fn defaults() -> Self {
        let navigate = [
            ("j", "next_format"),
            ("k", "prev_format"),
            ("<Down>", "next_format"),
            ("<Up>", "prev_format"),
            ("<Tab>", "next_format"),
            ("<BackTab>", "prev_format"),
            ("1", "select_simple"),
            ("2", "select_quoted"),
            ("3", "select_template"),
            ("4", "select_markdown"),
            ("y", "copy_output"),
            ("d", "clear_input"),
            ("i", "enter_insert_mode"),
            ("<Enter>", "enter_insert_mode"),
            ("?", "toggle_help"),
            ("<Esc>", "close_help"),
            ("q", "quit"),
        ];

        let insert = [
            ("<Esc>", "insert_cancel"),
            ("<Enter>", "insert_newline"),
            ("<BS>", "insert_backspace"),
            ("<Left>", "insert_left"),
            ("<Right>", "insert_right"),
            ("<Up>", "insert_up"),
            ("<Down>", "insert_down"),
            ("<Home>", "insert_home"),
            ("<End>", "insert_end"),
            ("<C-y>", "insert_copy"),
        ];

        Self {
            navigate: to_string_map(&navigate),
            insert: to_string_map(&insert),
        }
    }
}

fn to_string_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parsed lookup tables built once from a `KeybindingsConfig`.
#[derive(Debug, Clone)]
pub struct KeybindingCache {
    navigate: HashMap<KeyBinding, Action>,
    insert: HashMap<KeyBinding, Action>,
}

impl KeybindingCache {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        Self {
            navigate: build_map(&config.navigate),
            insert: build_map(&config.insert),
        }
    }

    pub fn lookup_navigate(&self, event: &KeyEvent) -> Option<Action> {
        self.navigate.get(&KeyBinding::from_event(event)).copied()
    }

    pub fn lookup_insert(&self, event: &KeyEvent) -> Option<Action> {
        self.insert.get(&KeyBinding::from_event(event)).copied()
    }
}

fn build_map(entries: &HashMap<String, String>) -> HashMap<KeyBinding, Action> {
    let mut map = HashMap::new();

    for (key_str, action_str) in entries {
        match (key_str.parse::<KeyBinding>(), action_str.parse::<Action>()) {
            (Ok(key), Ok(action)) => {
                map.insert(key, action);
            }
            _ => warn!("Ignoring invalid keybinding: {} = {}", key_str, action_str),
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_single_char() {
        let binding = "y".parse::<KeyBinding>().unwrap();
        assert_eq!(binding, KeyBinding::new(KeyCode::Char('y'), KeyModifiers::NONE));
    }

    #[test]
    fn test_parse_bracket_ctrl() {
        let binding = "<C-y>".parse::<KeyBinding>().unwrap();
        assert_eq!(
            binding,
            KeyBinding::new(KeyCode::Char('y'), KeyModifiers::CONTROL)
        );
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            "<Esc>".parse::<KeyBinding>().unwrap().code,
            KeyCode::Esc
        );
        assert_eq!(
            "<Space>".parse::<KeyBinding>().unwrap().code,
            KeyCode::Char(' ')
        );
        assert_eq!(
            "<BackTab>".parse::<KeyBinding>().unwrap().code,
            KeyCode::BackTab
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<KeyBinding>().is_err());
        assert!("<X-y>".parse::<KeyBinding>().is_err());
        assert!("yy".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn test_action_round_trip() {
        for action in [Action::CopyOutput, Action::InsertCancel, Action::Quit] {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_defaults_cover_copy_and_quit() {
        let cache = KeybindingCache::from_config(&KeybindingsConfig::defaults());
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('y'), KeyModifiers::NONE)),
            Some(Action::CopyOutput)
        );
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            cache.lookup_insert(&press(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Action::InsertCopy)
        );
    }

    #[test]
    fn test_plain_chars_unbound_in_insert_mode() {
        let cache = KeybindingCache::from_config(&KeybindingsConfig::defaults());
        assert_eq!(
            cache.lookup_insert(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_backtab_event_matches_binding() {
        // Terminals report Shift+Tab as BackTab with the Shift modifier set.
        let cache = KeybindingCache::from_config(&KeybindingsConfig::defaults());
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::PrevFormat)
        );
    }

    #[test]
    fn test_merge_overrides_default() {
        let mut user = KeybindingsConfig::default();
        user.navigate.insert("y".to_string(), "quit".to_string());
        let merged = user.merge_with_defaults();
        let cache = KeybindingCache::from_config(&merged);

        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('y'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        // Untouched defaults survive the merge.
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_invalid_entries_ignored() {
        let mut user = KeybindingsConfig::default();
        user.navigate
            .insert("<Bogus>".to_string(), "copy_output".to_string());
        user.navigate
            .insert("y".to_string(), "not_an_action".to_string());
        let cache = KeybindingCache::from_config(&user.merge_with_defaults());

        // Both bad entries are dropped; the rest of the table is unaffected.
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('y'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            cache.lookup_navigate(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_display_bracket_notation() {
        let binding = KeyBinding::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(binding.to_string(), "<C-y>");
        let plain = KeyBinding::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(plain.to_string(), "y");
    }
}
