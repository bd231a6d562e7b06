use ratatui::layout::{Constraint, Layout, Rect};

pub mod branch_picker;
pub mod completion;
pub mod confirmation;
pub mod error_bar;
pub mod footer;
pub mod header;
pub mod input_field;
pub mod ticket_form;
pub mod type_selector;

/// Helper function to center a rect within another rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(percent_y.min(100)),
        Constraint::Fill(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Fill(1),
    ])
    .split(popup_layout[1])[1]
}
