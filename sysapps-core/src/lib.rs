//! Navigation core for the handheld system apps menu
//!
//! 提供主菜单与手册浏览器共用的导航状态机：光标、滚动窗口、多级目录栈，
//! 以及菜单动作分发与短暂状态提示。不包含任何终端 I/O，
//! 绘制、按键与系统访问由调用方通过 [`traits`] 注入。

pub mod browser;
pub mod dispatcher;
mod error;
pub mod paged_list;
pub mod presentation;
pub mod service_menu;
pub mod status;
pub mod traits;
mod types;
pub mod viewport;

#[cfg(test)]
mod test_utils;

pub use browser::{
    ActivateOutcome, BackOutcome, BrowserConfig, BrowserLabels, BrowserMode, ManualBrowser,
    SectionView,
};
pub use dispatcher::{ActionDispatcher, ActionOutcome, ServiceScript};
pub use error::{CoreError, CoreResult};
pub use paged_list::PagedList;
pub use presentation::{
    Body, LegendButton, LegendItem, ListRow, ListView, Overlay, RowIcon, Screen, TextView,
};
pub use service_menu::{MenuLabels, ServiceMenu};
pub use status::{StatusKind, TransientStatus};
pub use traits::{ScriptRunner, SystemProbe, TreeStore};
pub use types::{
    render_section, sort_entries, Document, EntryKind, MemoryInfo, MenuAction, Row, RowList,
    Section, SectionBody, SystemSnapshot, TreeEntry, SECTION_WRAP_WIDTH,
};
pub use viewport::Viewport;
