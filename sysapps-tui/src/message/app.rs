//! 应用主消息枚举

use super::{BrowserMessage, MenuMessage};

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 主菜单相关消息
    Menu(MenuMessage),

    /// 手册浏览器相关消息
    Browser(BrowserMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
