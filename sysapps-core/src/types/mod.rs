//! 类型定义模块

mod row;
mod system;
mod tree;

pub use row::{Row, RowList};
pub use system::{MemoryInfo, MenuAction, SystemSnapshot};
pub use tree::{
    render_section, sort_entries, Document, EntryKind, Section, SectionBody, TreeEntry,
    SECTION_WRAP_WIDTH,
};
