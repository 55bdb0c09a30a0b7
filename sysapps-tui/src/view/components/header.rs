//! 标题栏与状态行

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sysapps_core::Screen;

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染标题栏：应用名，以及当前路径等子标题
pub fn render_title_bar(screen: &Screen, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(format!(" {}", t().common.app_name))];
    if let Some(subtitle) = &screen.subtitle {
        spans.push(Span::raw(" · "));
        spans.push(Span::raw(subtitle.clone()));
    }

    let title = Paragraph::new(Line::from(spans)).style(Styles::title_bar());
    frame.render_widget(title, area);
}

/// 渲染状态行（每行一项）
pub fn render_status_lines(lines: &[String], frame: &mut Frame, area: Rect) {
    if lines.is_empty() || area.height == 0 {
        return;
    }

    let content: Vec<Line> = lines
        .iter()
        .map(|line| Line::from(Span::styled(format!(" {line}"), Styles::text())))
        .collect();
    frame.render_widget(Paragraph::new(content), area);
}
