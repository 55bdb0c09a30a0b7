//! 手册浏览器相关消息

use super::Direction;

/// 手册浏览器消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMessage {
    /// 移动光标，章节正文中为滚动
    Move(Direction),
    /// 进入目录 / 打开手册 / 打开章节
    Activate,
    /// 返回上一级
    Back,
}
