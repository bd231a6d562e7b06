use crate::theme::Theme;
use jiraflow_core::state::{AppState, FormField, Mode, TicketForm, TitleFetchStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::input_field::{self, InputStyle};

/// Status line under the title field: `(text, colour)`, or `None` when there is nothing to say.
fn title_status(form: &TicketForm, theme: &Theme, spinner: &str) -> Option<(String, Color)> {
    match &form.fetch_status {
        TitleFetchStatus::Fetching => Some((
            format!("{spinner} Fetching title from Jira..."),
            theme.secondary,
        )),
        TitleFetchStatus::Fetched => Some(("✓ Title fetched from Jira".to_string(), theme.success)),
        TitleFetchStatus::Failed(message) => Some((
            format!("⚠ {message}. Enter the title manually."),
            theme.warning,
        )),
        TitleFetchStatus::Idle if !form.lookup_available => Some((
            "Jira CLI not available, enter the title manually".to_string(),
            theme.muted,
        )),
        TitleFetchStatus::Idle => None,
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme, spinner: &str) {
    let Mode::TicketInput(form) = &state.mode else {
        return;
    };

    let [ticket_area, ticket_error_area, title_area, status_area, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let border_for = |field: FormField| {
        if form.focus == field {
            theme.accent
        } else {
            theme.border
        }
    };

    input_field::draw(
        f,
        ticket_area,
        &InputStyle {
            title: "Ticket ID",
            placeholder: "PROJ-123",
            border_color: border_for(FormField::Ticket),
            text_color: if form.is_ticket_valid {
                theme.success
            } else {
                Color::Reset
            },
            muted_color: theme.muted,
            focused: form.focus == FormField::Ticket,
        },
        &form.ticket,
    );
    if let Some(error) = form.visible_ticket_error() {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {error}"), Style::default().fg(theme.error))),
            ticket_error_area,
        );
    }

    input_field::draw(
        f,
        title_area,
        &InputStyle {
            title: "Title (optional)",
            placeholder: "Short description of the work",
            border_color: border_for(FormField::Title),
            text_color: Color::Reset,
            muted_color: theme.muted,
            focused: form.focus == FormField::Title,
        },
        &form.title,
    );
    if let Some((text, color)) = title_status(form, theme, spinner) {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {text}"),
                Style::default().fg(color),
            ))),
            status_area,
        );
    }
}
