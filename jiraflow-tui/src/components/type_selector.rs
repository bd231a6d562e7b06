use crate::theme::Theme;
use jiraflow_core::state::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Mode::TypeSelection(selector) = &state.mode else {
        return;
    };

    let items: Vec<ListItem> = selector
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.display_label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", item.description), theme.muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(theme.panel(" What kind of branch? "))
        .highlight_style(theme.selection(theme.accent))
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default()
        .with_selected(selector.list.selected)
        .with_offset(selector.list.scroll_offset);
    f.render_stateful_widget(list, area, &mut list_state);
}
