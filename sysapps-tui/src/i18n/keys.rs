//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **核心库产出的文本归 `menu.*` / `manuals.*`**：直接使用核心库的标签结构体，
//!    菜单项、状态行与浏览器提示由核心库拼装
//! 2. **跨组件复用归 `common.*`**：标题栏等通用词汇
//! 3. **键盘提示归 `hints.*`**：按键名称
//! 4. **状态提示归 `status.*`**：操作结果弹窗

use sysapps_core::{BrowserLabels, MenuLabels};

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称）
    pub hints: HintTexts,
    /// 主菜单文本
    pub menu: MenuLabels,
    /// 手册浏览器文本
    pub manuals: BrowserLabels,
    /// 状态提示文本
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub more_above: &'static str,
    pub more_below: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
}

/// 按键名称（对应图例中的物理按键）
pub struct KeyNames {
    pub confirm: &'static str, // "Enter"
    pub back: &'static str,    // "Esc"
    pub exit: &'static str,    // "q"
    pub scroll: &'static str,  // "↑↓"
}

// ============================================================================
// 状态提示
// ============================================================================

/// 操作结果提示
pub struct StatusTexts {
    pub action_failed: &'static str,
}
