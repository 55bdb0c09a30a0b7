//! 界面组件

pub mod header;
pub mod list;
pub mod overlay;
pub mod statusbar;
pub mod text;
