use crate::theme::Theme;
use jiraflow_core::state::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme, spinner: &str) {
    let Mode::Confirmation(confirmation) = &state.mode else {
        return;
    };
    let selections = &state.selections;
    let muted = theme.muted();

    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), muted),
            Span::raw(value.to_string()),
        ])
    };
    let title = if selections.ticket_title.is_empty() {
        "(none)"
    } else {
        selections.ticket_title.as_str()
    };

    let mut lines = vec![
        row("Branch type", &selections.branch_type),
        row("Base branch", &selections.base_branch),
        row("Ticket", &selections.ticket_id),
        row("Title", title),
        Line::raw(""),
        Line::from(Span::styled("Branch to create:", muted)),
        Line::from(Span::styled(
            confirmation.branch_name.clone(),
            theme.emphasis(theme.secondary),
        )),
    ];

    if let Some(error) = &confirmation.error {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
    if confirmation.creating {
        lines.push(Line::raw(""));
        lines.push(theme.spinner_line(spinner, "Creating branch..."));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(theme.panel(" Review "))
            .wrap(Wrap { trim: false }),
        area,
    );
}
