//! Modal notice popup

use crate::ui::app::{Notice, NoticeKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 6;

/// Draw `notice` centered over `area`
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let accent = match notice.kind {
        NoticeKind::Info => DEFAULT_THEME.success,
        NoticeKind::Warning => DEFAULT_THEME.warning,
        NoticeKind::Error => DEFAULT_THEME.error,
    };

    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
