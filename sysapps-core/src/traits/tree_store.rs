//! 手册树存储抽象 Trait

use crate::error::CoreResult;
use crate::types::{Document, TreeEntry};

/// 手册树存储 Trait
///
/// 平台实现:
/// - TUI: `FsTreeStore`（目录 = 分类，`*.json` = 手册）
///
/// `path` 为从根目录开始的路径段，根目录为空切片。
pub trait TreeStore: Send + Sync {
    /// 列出目录下的子目录与手册
    ///
    /// # Returns
    /// * 子目录在前，手册在后，各自按名称排序
    fn list_children(&self, path: &[String]) -> CoreResult<Vec<TreeEntry>>;

    /// 加载手册
    ///
    /// # Arguments
    /// * `path` - 手册所在目录
    /// * `name` - 手册名称（不含扩展名）
    fn load_document(&self, path: &[String], name: &str) -> CoreResult<Document>;
}
