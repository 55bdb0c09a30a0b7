//! View 层：把 `sysapps_core::Screen` 画到终端上
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 整体布局
//!         mod components;     // 标题栏、列表、正文、状态栏、弹窗
//!         pub mod theme;      // 主题与样式
//!
//!
//!     每一帧的数据流：
//!
//!         model::App ──screen()──▶ Screen ──render()──▶ Frame
//!
//!     View 层只读取 Screen，不保存任何导航状态；
//!     光标、滚动偏移、可见行都已经由核心库计算好。
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────┐
//!         │ 标题栏（应用名 · 子标题）                   │  1 行
//!         ├──────────────────────────────────────────┤
//!         │ 状态行（SSH / SCP / Battery / IP）         │  n 行，可为 0
//!         ├──────────────────────────────────────────┤
//!         │ ┌ 主体 ─────────────────────────────────┐ │
//!         │ │ ▲ more                               │ │
//!         │ │ 📁 games                              │ │
//!         │ │ 📄 intro                              │ │
//!         │ │ ▼ more                               │ │
//!         │ └──────────────────────────────────────┘ │
//!         ├──────────────────────────────────────────┤
//!         │ 图例（Enter Select │ Esc Back）          │  1 行
//!         └──────────────────────────────────────────┘
//!
//!     如果 Screen 带有 overlay，则在最上层绘制居中弹窗。

mod components;
mod layout;
pub mod theme;

pub use layout::render;
