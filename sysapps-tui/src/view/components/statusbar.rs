//! 底部状态栏组件：按键图例

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sysapps_core::{LegendButton, LegendItem};

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(legend: &[LegendItem], frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (i, item) in legend.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key_name(item.button), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item.label.clone(), Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 图例按钮对应的按键名称
fn key_name(button: LegendButton) -> &'static str {
    let keys = &t().hints.keys;
    match button {
        LegendButton::Confirm => keys.confirm,
        LegendButton::Back => keys.back,
        LegendButton::Exit => keys.exit,
        LegendButton::Scroll => keys.scroll,
    }
}
