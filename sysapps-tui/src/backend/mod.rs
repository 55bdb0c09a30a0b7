//! Backend 层：外部协作者的实现
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // JSON 配置文件
//!         mod core_service;       // 组装 sysapps-core 组件
//!         mod fs_tree_store;      // TreeStore：目录 + *.json 手册
//!         mod linux_probe;        // SystemProbe：systemctl、/sys、/proc
//!         mod script_runner;      // ScriptRunner：bash 执行开关脚本
//!
//!
//!     ┌──────────────┐      ┌──────────────────────────────────────┐
//!     │  model::App  │ ───▶ │ CoreService                          │
//!     └──────────────┘      │   · tree_store  → FsTreeStore        │
//!                           │   · probe       → LinuxProbe         │
//!                           │   · runner      → BashScriptRunner   │
//!                           └──────────────────┬───────────────────┘
//!                                              │ Arc<dyn Trait>
//!                                              ▼
//!                           ┌──────────────────────────────────────┐
//!                           │ sysapps-core                         │
//!                           │   ManualBrowser / ActionDispatcher   │
//!                           └──────────────────────────────────────┘

mod config_service;
mod core_service;
mod fs_tree_store;
mod linux_probe;
mod script_runner;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use core_service::CoreService;
#[cfg(test)]
pub use fs_tree_store::FsTreeStore;
