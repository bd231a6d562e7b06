use crate::theme::Theme;
use jiraflow_core::{config::APP_NAME, state::AppState};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// App name and the current step, underlined.
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!(" {APP_NAME} "), theme.selection(theme.accent)),
        Span::raw("  "),
        Span::styled(state.mode.header(), theme.emphasis(theme.accent)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(Paragraph::new(line).block(block), area);
}
