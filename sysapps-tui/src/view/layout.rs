//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use sysapps_core::{Body, Screen};

use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 渲染当前页面
pub fn render(app: &App, frame: &mut Frame) {
    let screen = app.screen();
    draw_screen(&screen, frame);
}

/// 绘制一帧
fn draw_screen(screen: &Screen, frame: &mut Frame) {
    let c = colors();
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), size);

    // 四层布局：标题栏 + 状态行 + 主体 + 状态栏
    let status_height = u16::try_from(screen.status_lines.len()).unwrap_or(u16::MAX);
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 标题栏
            Constraint::Length(status_height), // 状态行
            Constraint::Min(3),                // 主体
            Constraint::Length(1),             // 状态栏
        ])
        .split(size);

    components::header::render_title_bar(screen, frame, main_layout[0]);
    components::header::render_status_lines(&screen.status_lines, frame, main_layout[1]);

    // 主体边框
    let block = Block::default()
        .title(format!(" {} ", screen.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let body_area = block.inner(main_layout[2]);
    frame.render_widget(block, main_layout[2]);

    match &screen.body {
        Body::List(list) => components::list::render(list, frame, body_area),
        Body::Text(text) => components::text::render(text, frame, body_area),
        Body::Empty(message) => components::text::render_placeholder(message, frame, body_area),
    }

    components::statusbar::render(&screen.legend, frame, main_layout[3]);

    // 弹窗（在最上层）
    if let Some(overlay) = &screen.overlay {
        components::overlay::render(overlay, frame);
    }
}
