//! 状态弹窗
//!
//! 占据屏幕中央，颜色随状态种类变化。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use sysapps_core::Overlay;
use unicode_width::UnicodeWidthStr;

use crate::view::theme::colors;

const MIN_WIDTH: u16 = 24;

/// 渲染状态弹窗
pub fn render(overlay: &Overlay, frame: &mut Frame) {
    let c = colors();
    let accent = c.status(overlay.kind);

    let text_width = u16::try_from(overlay.text.width()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(6).max(MIN_WIDTH);
    let area = centered_rect(width, 5, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(c.bg));

    let paragraph = Paragraph::new(format!("\n{}", overlay.text))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD));

    frame.render_widget(paragraph, area);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
