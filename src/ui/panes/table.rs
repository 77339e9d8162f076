//! Glossary table pane rendering

use crate::ui::table_view::TableView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the glossary table, one column per header field
pub fn render_table_pane(frame: &mut Frame, area: Rect, view: &mut TableView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    // Borders plus the header line
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    let range = view.visible_range(visible_height);

    let title = format!(" Glossary ({}) ", view.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let header = Row::new(view.columns().iter().map(|name| {
        Cell::from(name.as_str()).style(
            Style::default()
                .fg(DEFAULT_THEME.header)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let column_count = view.columns().len().max(1) as u32;
    let widths: Vec<Constraint> = (0..column_count)
        .map(|_| Constraint::Ratio(1, column_count))
        .collect();

    if view.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let table = Table::new(Vec::<Row>::new(), widths.clone()).header(header);
        frame.render_widget(table, inner);

        if inner.height > 1 {
            let hint_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            let hint = Paragraph::new("(no entries yet)")
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(hint, hint_area);
        }
        return;
    }

    let selected = view.selected();

    let rows: Vec<Row> = view.rows()[range.clone()]
        .iter()
        .zip(range)
        .map(|(cells, index)| {
            let style = if Some(index) == selected {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.selected_row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Row::new(cells.iter().map(|c| Cell::from(c.as_str()))).style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}
