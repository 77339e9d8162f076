//! Entry form pane rendering

use crate::ui::form::{EntryForm, Field};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Share of the form row given to each field, in [`Field::ALL`] order
const FIELD_WIDTHS: [u16; 3] = [30, 45, 25];

/// Render the three input boxes side by side.
///
/// Returns where the terminal cursor belongs when one of the fields has focus.
pub fn render_form_pane(
    frame: &mut Frame,
    area: Rect,
    form: &EntryForm,
    focused: Option<Field>,
) -> Option<Position> {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(FIELD_WIDTHS.map(Constraint::Percentage))
        .split(area);

    let mut cursor = None;

    for (field, &box_area) in Field::ALL.iter().copied().zip(boxes.iter()) {
        let is_focused = focused == Some(field);
        let border_style = if is_focused {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(box_area);

        let value = form.value(field);
        let text_width = Span::raw(value).width();
        let inner_width = inner.width.max(1) as usize;

        // Keep the end of long input in view
        let scroll_x = text_width.saturating_sub(inner_width - 1);
        let paragraph = Paragraph::new(value)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.fg))
            .scroll((0, scroll_x as u16));
        frame.render_widget(paragraph, box_area);

        if is_focused {
            let offset = (text_width - scroll_x) as u16;
            cursor = Some(Position::new(inner.x + offset, inner.y));
        }
    }

    cursor
}
