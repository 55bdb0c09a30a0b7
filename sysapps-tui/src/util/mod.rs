//! src/util/mod.rs
//! Util 层：终端与日志
//!
//! 与业务无关的基础设施，只在启动和退出时使用。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志写入文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     启动顺序（src/main.rs）：
//!
//!         init_logging(path)          // stdout 属于界面，日志写入文件
//!             │                       // 默认 <cache dir>/sysapps/sysapps.log，级别取自 RUST_LOG
//!             ▼
//!         init_terminal()             // 原始模式 + 备用屏幕 + 隐藏光标，并安装 panic hook
//!             │
//!             ▼
//!         app::run(..)                // 主循环
//!             │
//!             ▼
//!         restore_terminal()          // 即使 run 返回错误也先恢复终端，再返回错误
//!
//!
//!     panic hook 在打印 panic 信息之前离开备用屏幕，
//!     否则信息会随备用屏幕一起消失，终端也停留在原始模式。
//!
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::{default_log_path, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
