use jiraflow_core::{
    action::Action,
    config::{Command, KeysConfig},
    keyboard::KeyEvent,
    state::{AppState, Mode},
};

/// Resolve a key event into an Action based on the current screen and its keymap.
///
/// Unbound printable characters become text input on screens that take text.
pub fn resolve_action(
    key: crossterm::event::KeyEvent,
    state: &AppState,
    keys: &KeysConfig,
) -> Option<Action> {
    let key = KeyEvent::from(key);
    let keymap = keys.keymap_for_mode(&state.mode);

    if let Some(command) = keymap.get(&key) {
        return command_to_action(command);
    }

    if accepts_text(&state.mode) {
        return key
            .typed_char()
            .filter(|c| !c.is_control())
            .map(Action::InsertChar);
    }

    None
}

fn accepts_text(mode: &Mode) -> bool {
    match mode {
        Mode::BranchSelection(picker) => picker.searching,
        Mode::TicketInput(_) => true,
        _ => false,
    }
}

fn command_to_action(command: &Command) -> Option<Action> {
    let action = match command {
        Command::Noop => return None,
        Command::Quit => Action::Quit,
        Command::GoBack => Action::GoBack,
        Command::Confirm => Action::Confirm,
        Command::MoveUp => Action::MoveSelection(-1),
        Command::MoveDown => Action::MoveSelection(1),
        Command::PageUp => Action::PageUp,
        Command::PageDown => Action::PageDown,
        Command::MoveTop => Action::MoveTop,
        Command::MoveBottom => Action::MoveBottom,
        Command::StartSearch => Action::StartSearch,
        Command::ExitSearch => Action::ExitSearch,
        Command::ClearSearch => Action::ClearSearch,
        Command::NextField => Action::NextField,
        Command::PreviousField => Action::PreviousField,
        Command::DeleteBackwardChar => Action::DeleteBackwardChar,
        Command::DeleteBackwardWord => Action::DeleteBackwardWord,
        Command::DeleteForwardChar => Action::DeleteForwardChar,
        Command::MoveCursorLeft => Action::CursorLeft,
        Command::MoveCursorRight => Action::CursorRight,
        Command::MoveCursorStart => Action::CursorStart,
        Command::MoveCursorEnd => Action::CursorEnd,
    };
    Some(action)
}
