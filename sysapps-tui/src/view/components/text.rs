//! 章节正文与空列表提示

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sysapps_core::TextView;

use crate::i18n::t;
use crate::view::theme::Styles;

use super::list::render_indicator;

/// 渲染已滚动到位的正文窗口
pub fn render(text: &TextView, frame: &mut Frame, area: Rect) {
    let rows = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if text.more_above {
        render_indicator(t().common.more_above, frame, chunks[0]);
    }

    let lines: Vec<Line> = text
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(format!("  {line}"), Styles::text())))
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if text.more_below {
        render_indicator(t().common.more_below, frame, chunks[2]);
    }
}

/// 渲染居中的占位提示
pub fn render_placeholder(message: &str, frame: &mut Frame, area: Rect) {
    let top = area.height / 2;
    let line_area = Rect::new(area.x, area.y + top, area.width, area.height.min(1));
    let paragraph = Paragraph::new(Span::styled(message.to_string(), Styles::muted()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}
