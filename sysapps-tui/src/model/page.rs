//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 系统服务菜单
    #[default]
    Menu,
    /// 手册浏览器
    Manuals,
}
