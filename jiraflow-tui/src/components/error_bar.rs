use crate::theme::Theme;
use jiraflow_core::state::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::Paragraph,
};

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(error) = &state.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" Error: {error}"),
            theme.emphasis(theme.error),
        ));
        f.render_widget(error_line, area);
    }
}
