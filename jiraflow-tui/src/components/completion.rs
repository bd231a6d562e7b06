use crate::theme::Theme;
use jiraflow_core::state::{AppState, Mode, Outcome};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn outcome_lines<'a>(outcome: &'a Outcome, theme: &Theme) -> Vec<Line<'a>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match outcome {
        Outcome::Created { branch, base } => vec![
            Line::from(Span::styled(
                "✓ Branch created and checked out",
                bold.fg(theme.success),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(branch.as_str(), bold.fg(theme.secondary)),
                Span::styled(format!(" (from {base})"), Style::default().fg(theme.muted)),
            ]),
            Line::raw(""),
            Line::from("Next steps:"),
            Line::from(format!("  git push -u origin {branch}")),
        ],
        Outcome::Failed {
            branch,
            message,
            suggestions,
            ..
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "✗ Branch creation failed",
                    bold.fg(theme.error),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Attempted: ", Style::default().fg(theme.muted)),
                    Span::raw(branch.as_str()),
                ]),
                Line::from(message.as_str()),
            ];
            if !suggestions.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::from("Suggestions:"));
                lines.extend(
                    suggestions
                        .iter()
                        .map(|s| Line::from(format!("  • {s}"))),
                );
            }
            lines
        }
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Mode::Complete(outcome) = &state.mode else {
        return;
    };
    let border = if outcome.is_success() {
        theme.success
    } else {
        theme.error
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let popup = super::centered_rect(80, 70, area);
    f.render_widget(
        Paragraph::new(outcome_lines(outcome, theme))
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
