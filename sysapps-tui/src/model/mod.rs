//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 导航相关的状态（光标、滚动、目录栈）全部由 sysapps-core 的
//! ServiceMenu 与 ManualBrowser 持有，这里只负责把它们组装在一起。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod page;           // 页面路由（Menu / Manuals）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                      // 退出标志
//!             pub page: Page,                             // 当前页面
//!             pub menu: ServiceMenu,                      // 主菜单（分页列表 + 系统快照）
//!             pub browser: ManualBrowser,                 // 手册浏览器（目录栈）
//!             pub status: Option<TransientStatus>,        // 全屏状态弹窗
//!             pub pending_action: Option<MenuAction>,     // 等待执行的阻塞动作
//!             ...
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = App::new(core, &config, standalone);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/layout.rs 中读取：app.screen()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Page 只是门牌号：
//!         - Menu：系统服务菜单
//!         - Manuals：手册浏览器
//!
//!     数据流：
//!         主菜单选中 "Manuals" 按 Enter → Page::Manuals
//!         浏览器在根目录按 Esc          → Page::Menu（独立启动时直接退出）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、阻塞动作（pending_action）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     开关 SSH / SCP 会同步执行脚本。为了在执行前先显示 “Processing...”：
//!
//!         Enter ──▶ update 设置 status = Processing，pending_action = Some(..)
//!                       │
//!                       ▼
//!                   主循环绘制一帧（弹窗可见）
//!                       │
//!                       ▼
//!                   update::run_pending_action(app)  // 阻塞，结束后换成结果弹窗
//!
//!     结果弹窗带有截止时间，主循环每一轮调用 expire_status() 清除过期弹窗。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod page;

pub use app::App;
pub use page::Page;
