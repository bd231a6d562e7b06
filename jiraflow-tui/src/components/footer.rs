use crate::theme::Theme;
use jiraflow_core::{
    config::{Command, KeysConfig},
    state::{AppState, Mode},
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

fn label(mode: &Mode, command: &Command) -> &'static str {
    match (mode, command) {
        (Mode::TicketInput(_), Command::Confirm) => "Submit",
        (Mode::Confirmation(_), Command::Confirm) => "Create branch",
        (Mode::Complete(_), Command::Quit) => "Exit",
        _ => command.description(),
    }
}

/// `(key, label)` pairs for the current screen, taken from its effective keymap.
/// Commands with no key bound are left out.
pub fn hints(state: &AppState, keys: &KeysConfig) -> Vec<(String, &'static str)> {
    let keymap = keys.keymap_for_mode(&state.mode);
    state
        .mode
        .footer_commands()
        .iter()
        .filter_map(|command| {
            KeysConfig::find_key(&keymap, command)
                .map(|key| (key.to_string(), label(&state.mode, command)))
        })
        .collect()
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme, keys: &KeysConfig) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in hints(state, keys).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            key,
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(theme.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
