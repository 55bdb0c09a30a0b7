//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长等待 tick_ms
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，只处理 Press
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一帧自动重绘
//!             其他                                 // 忽略
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键 → 逻辑按钮 → 消息
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     所有按键先归一成五个逻辑按钮（keymap.rs）：
//!
//!         Up       ↑  k
//!         Down     ↓  j
//!         Confirm  Enter  Space  a
//!         Back     Esc  Backspace  b
//!         Exit     q  F10  Ctrl+C
//!
//!     再按当前页面翻译为消息（handler.rs）：
//!
//!                     Page::Menu                     Page::Manuals
//!         Up/Down     Menu(Move(..))                 Browser(Move(..))
//!         Confirm     Menu(Activate)                 Browser(Activate)
//!         Back        Menu(Back)                     Browser(Back)
//!         Exit        Quit                           Quit
//!
//!     翻译结果随后在 src/app.rs 中传入 update::update(app, msg)。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
