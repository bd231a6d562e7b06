use crate::theme::Theme;
use jiraflow_core::state::{AppState, Mode, candidate_label};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::input_field::{self, InputStyle};

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme, spinner: &str) {
    let Mode::BranchSelection(picker) = &state.mode else {
        return;
    };

    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let search_border = if picker.searching {
        theme.secondary
    } else {
        theme.border
    };
    input_field::draw(
        f,
        search_area,
        &InputStyle {
            title: "search",
            placeholder: if picker.searching {
                "Type to filter branches..."
            } else {
                "Press / to search branches"
            },
            border_color: search_border,
            text_color: theme.secondary,
            muted_color: theme.muted,
            focused: picker.searching,
        },
        &picker.query,
    );

    let title = if picker.query.is_empty() {
        format!(" {} branches ", picker.visible_len())
    } else {
        format!(" {} ", picker.summary())
    };
    let block = theme.panel(title);

    if state.loading_branches {
        let text = theme.spinner_line(spinner, "Loading branches...");
        f.render_widget(Paragraph::new(text).block(block), list_area);
        return;
    }

    if picker.visible_len() == 0 {
        let text = Span::styled(picker.empty_message(), theme.muted());
        f.render_widget(Paragraph::new(text).block(block), list_area);
        return;
    }

    let items: Vec<ListItem> = picker
        .visible()
        .map(|candidate| {
            let style = if candidate.is_current {
                Style::default().fg(theme.success)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(candidate_label(candidate), style))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection(theme.secondary))
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default()
        .with_selected(picker.list.selected)
        .with_offset(picker.list.scroll_offset);
    f.render_stateful_widget(list, list_area, &mut list_state);
}
