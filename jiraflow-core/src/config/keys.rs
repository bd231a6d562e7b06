use crate::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::state::Mode;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Commands that can be bound to keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// No-op: explicitly unbinds a key (removes inherited/default binding)
    Noop,

    // Wizard flow
    Quit,
    GoBack,
    Confirm,

    // List movement
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveTop,
    MoveBottom,

    // Branch search
    StartSearch,
    ExitSearch,
    ClearSearch,

    // Ticket form
    NextField,
    PreviousField,

    // Text editing
    DeleteBackwardChar,
    DeleteBackwardWord,
    DeleteForwardChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
}

const COMMAND_NAMES: &[(&str, Command)] = &[
    ("quit", Command::Quit),
    ("go_back", Command::GoBack),
    ("confirm", Command::Confirm),
    ("move_up", Command::MoveUp),
    ("move_down", Command::MoveDown),
    ("page_up", Command::PageUp),
    ("page_down", Command::PageDown),
    ("move_top", Command::MoveTop),
    ("move_bottom", Command::MoveBottom),
    ("start_search", Command::StartSearch),
    ("exit_search", Command::ExitSearch),
    ("clear_search", Command::ClearSearch),
    ("next_field", Command::NextField),
    ("previous_field", Command::PreviousField),
    ("delete_backward_char", Command::DeleteBackwardChar),
    ("delete_backward_word", Command::DeleteBackwardWord),
    ("delete_forward_char", Command::DeleteForwardChar),
    ("move_cursor_left", Command::MoveCursorLeft),
    ("move_cursor_right", Command::MoveCursorRight),
    ("move_cursor_start", Command::MoveCursorStart),
    ("move_cursor_end", Command::MoveCursorEnd),
];

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "noop" | "none" | "unbound") {
            return Ok(Command::Noop);
        }
        COMMAND_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, command)| command.clone())
            .ok_or_else(|| format!("Unknown command: {s}"))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = COMMAND_NAMES
            .iter()
            .find(|(_, command)| command == self)
            .map_or("noop", |(name, _)| *name);
        f.write_str(name)
    }
}

impl Command {
    /// Short label for the footer hint
    pub fn description(&self) -> &'static str {
        match self {
            Command::Noop => "Unbound",
            Command::Quit => "Quit",
            Command::GoBack => "Back",
            Command::Confirm => "Select",
            Command::MoveUp => "Up",
            Command::MoveDown => "Down",
            Command::PageUp => "Page up",
            Command::PageDown => "Page down",
            Command::MoveTop => "Top",
            Command::MoveBottom => "Bottom",
            Command::StartSearch => "Search",
            Command::ExitSearch => "Done searching",
            Command::ClearSearch => "Clear search",
            Command::NextField => "Next field",
            Command::PreviousField => "Previous field",
            Command::DeleteBackwardChar => "Delete char",
            Command::DeleteBackwardWord => "Delete word",
            Command::DeleteForwardChar => "Delete forward",
            Command::MoveCursorLeft => "Cursor left",
            Command::MoveCursorRight => "Cursor right",
            Command::MoveCursorStart => "Cursor to start",
            Command::MoveCursorEnd => "Cursor to end",
        }
    }
}

/// Key bindings for a specific layer/mode
pub type KeyMap = HashMap<KeyEvent, Command>;

/// Complete key binding configuration, composed from reusable layers.
#[derive(Debug, Clone)]
pub struct KeysConfig {
    pub general: KeyMap,
    pub text_edit: KeyMap,
    pub list_navigation: KeyMap,
    pub type_select: KeyMap,
    pub branch_browse: KeyMap,
    pub branch_search: KeyMap,
    pub ticket_form: KeyMap,
    pub confirmation: KeyMap,
    pub completion: KeyMap,
}

/// Intermediate structure for deserializing key bindings
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KeysConfigRaw {
    general: HashMap<String, String>,
    text_edit: HashMap<String, String>,
    list_navigation: HashMap<String, String>,
    type_select: HashMap<String, String>,
    branch_browse: HashMap<String, String>,
    branch_search: HashMap<String, String>,
    ticket_form: HashMap<String, String>,
    confirmation: HashMap<String, String>,
    completion: HashMap<String, String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn layer(bindings: &[(KeyEvent, Command)]) -> KeyMap {
    bindings.iter().cloned().collect()
}

impl KeysConfig {
    pub fn new() -> Self {
        Self {
            general: layer(&[(ctrl('c'), Command::Quit)]),
            text_edit: layer(&[
                (key(KeyCode::Backspace), Command::DeleteBackwardChar),
                (ctrl('w'), Command::DeleteBackwardWord),
                (key(KeyCode::Delete), Command::DeleteForwardChar),
                (key(KeyCode::Left), Command::MoveCursorLeft),
                (key(KeyCode::Right), Command::MoveCursorRight),
                (key(KeyCode::Home), Command::MoveCursorStart),
                (key(KeyCode::End), Command::MoveCursorEnd),
                (ctrl('a'), Command::MoveCursorStart),
                (ctrl('e'), Command::MoveCursorEnd),
            ]),
            list_navigation: layer(&[
                (key(KeyCode::Up), Command::MoveUp),
                (key(KeyCode::Down), Command::MoveDown),
                (key(KeyCode::Char('k')), Command::MoveUp),
                (key(KeyCode::Char('j')), Command::MoveDown),
                (ctrl('p'), Command::MoveUp),
                (ctrl('n'), Command::MoveDown),
                (key(KeyCode::PageUp), Command::PageUp),
                (key(KeyCode::PageDown), Command::PageDown),
                (key(KeyCode::Home), Command::MoveTop),
                (key(KeyCode::End), Command::MoveBottom),
            ]),
            type_select: layer(&[
                (key(KeyCode::Enter), Command::Confirm),
                (key(KeyCode::Esc), Command::GoBack),
                (key(KeyCode::Char('q')), Command::Quit),
            ]),
            branch_browse: layer(&[
                (key(KeyCode::Enter), Command::Confirm),
                (key(KeyCode::Esc), Command::GoBack),
                (key(KeyCode::Char('/')), Command::StartSearch),
                (key(KeyCode::Char('q')), Command::Quit),
            ]),
            branch_search: layer(&[
                (key(KeyCode::Enter), Command::Confirm),
                (key(KeyCode::Esc), Command::ExitSearch),
                (ctrl('u'), Command::ClearSearch),
                (key(KeyCode::Up), Command::MoveUp),
                (key(KeyCode::Down), Command::MoveDown),
                (ctrl('p'), Command::MoveUp),
                (ctrl('n'), Command::MoveDown),
            ]),
            ticket_form: layer(&[
                (key(KeyCode::Enter), Command::Confirm),
                (key(KeyCode::Esc), Command::GoBack),
                (key(KeyCode::Tab), Command::NextField),
                (key(KeyCode::Down), Command::NextField),
                (key(KeyCode::BackTab), Command::PreviousField),
                (key(KeyCode::Up), Command::PreviousField),
            ]),
            confirmation: layer(&[
                (key(KeyCode::Enter), Command::Confirm),
                (key(KeyCode::Char('y')), Command::Confirm),
                (key(KeyCode::Esc), Command::GoBack),
                (key(KeyCode::Char('n')), Command::GoBack),
                (key(KeyCode::Char('q')), Command::Quit),
            ]),
            completion: layer(&[
                (key(KeyCode::Enter), Command::Quit),
                (key(KeyCode::Esc), Command::Quit),
                (key(KeyCode::Char('q')), Command::Quit),
            ]),
        }
    }

    /// Build the effective keymap for a given app mode using precedence:
    /// general < shared layers < mode-specific
    pub fn keymap_for_mode(&self, mode: &Mode) -> KeyMap {
        let mut combined = KeyMap::new();
        Self::apply_layer(&mut combined, &self.general);

        match mode {
            Mode::TypeSelection(_) => {
                Self::apply_layer(&mut combined, &self.list_navigation);
                Self::apply_layer(&mut combined, &self.type_select);
            }
            Mode::BranchSelection(picker) if picker.searching => {
                Self::apply_layer(&mut combined, &self.text_edit);
                Self::apply_layer(&mut combined, &self.branch_search);
            }
            Mode::BranchSelection(_) => {
                Self::apply_layer(&mut combined, &self.list_navigation);
                Self::apply_layer(&mut combined, &self.branch_browse);
            }
            Mode::TicketInput(_) => {
                Self::apply_layer(&mut combined, &self.text_edit);
                Self::apply_layer(&mut combined, &self.ticket_form);
            }
            Mode::Confirmation(_) => {
                Self::apply_layer(&mut combined, &self.confirmation);
            }
            Mode::Complete(_) => {
                Self::apply_layer(&mut combined, &self.completion);
            }
        }

        combined
    }

    /// Find the first key bound to a given command in a keymap.
    pub fn find_key(keymap: &KeyMap, command: &Command) -> Option<KeyEvent> {
        keymap
            .iter()
            .filter(|(_, cmd)| *cmd == command)
            .map(|(key, _)| *key)
            .min()
    }

    fn apply_layer(base: &mut KeyMap, layer: &KeyMap) {
        for (key, command) in layer {
            if *command == Command::Noop {
                base.remove(key);
            } else {
                base.insert(*key, command.clone());
            }
        }
    }

    /// Parse a string representation of keybindings into a `KeyMap`
    fn parse_keymap(raw_map: &HashMap<String, String>) -> Result<KeyMap, String> {
        raw_map
            .iter()
            .map(|(key_str, command_str)| {
                let key_event = KeyEvent::from_str(key_str)
                    .map_err(|e| format!("Invalid key '{key_str}': {e}"))?;
                let command = Command::from_str(command_str)
                    .map_err(|e| format!("Invalid command '{command_str}': {e}"))?;
                Ok((key_event, command))
            })
            .collect()
    }

    /// Merge user configuration with defaults.
    ///
    /// Keep `Noop` values so higher-precedence layers can explicitly unbind inherited mappings.
    fn from_raw(raw: &KeysConfigRaw) -> Result<Self, String> {
        let mut config = Self::default();
        for (target, source) in [
            (&mut config.general, &raw.general),
            (&mut config.text_edit, &raw.text_edit),
            (&mut config.list_navigation, &raw.list_navigation),
            (&mut config.type_select, &raw.type_select),
            (&mut config.branch_browse, &raw.branch_browse),
            (&mut config.branch_search, &raw.branch_search),
            (&mut config.ticket_form, &raw.ticket_form),
            (&mut config.confirmation, &raw.confirmation),
            (&mut config.completion, &raw.completion),
        ] {
            target.extend(Self::parse_keymap(source)?);
        }
        Ok(config)
    }
}

impl<'de> Deserialize<'de> for KeysConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = KeysConfigRaw::deserialize(deserializer)?;
        KeysConfig::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}
