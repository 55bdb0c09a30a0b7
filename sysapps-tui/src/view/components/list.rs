//! 分页列表
//!
//! 只画核心库给出的可见行；上下方还有内容时显示 ▲ / ▼ 提示。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sysapps_core::{ListRow, ListView, RowIcon};

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染列表
pub fn render(list: &ListView, frame: &mut Frame, area: Rect) {
    let rows = u16::try_from(list.rows.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),    // ▲
            Constraint::Length(rows), // 可见行
            Constraint::Length(1),    // ▼
            Constraint::Min(0),
        ])
        .split(area);

    if list.more_above {
        render_indicator(t().common.more_above, frame, chunks[0]);
    }

    let lines: Vec<Line> = list.rows.iter().map(row_line).collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if list.more_below {
        render_indicator(t().common.more_below, frame, chunks[2]);
    }
}

fn row_line(row: &ListRow) -> Line<'_> {
    let marker = if row.selected { "›" } else { " " };
    let text = match row.icon {
        Some(icon) => format!("{marker} {} {}", icon_glyph(icon), row.label),
        None => format!("{marker} {}", row.label),
    };

    let style = if row.selected {
        Styles::selected()
    } else {
        Styles::text()
    };
    Line::from(Span::styled(text, style))
}

fn icon_glyph(icon: RowIcon) -> &'static str {
    match icon {
        RowIcon::Folder => "📁",
        RowIcon::Document => "📄",
        RowIcon::Section => "§",
    }
}

/// ▲ / ▼ 提示
pub fn render_indicator(text: &str, frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(format!("  {text}"), Styles::muted()));
    frame.render_widget(Paragraph::new(line), area);
}
