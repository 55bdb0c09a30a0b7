//! 主菜单相关消息

use super::Direction;

/// 主菜单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// 上下移动光标
    Move(Direction),
    /// 执行选中的动作
    Activate,
    /// 返回（主菜单是顶层，只用于关闭弹窗）
    Back,
}
