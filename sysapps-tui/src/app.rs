//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 被初始化为：
//!
//! App {
//!     should_quit: false,                 // 决定应用是否应该退出
//!     page: Page::Menu,                   // `sysapps manuals` 启动时为 Page::Manuals
//!     menu: ServiceMenu,                  // 光标在第一项，行由当前系统快照生成
//!     browser: ManualBrowser,             // 位于手册根目录
//!     status: None,                       // 没有弹窗
//!     pending_action: None,               // 没有等待执行的动作
//! }
//!
//!
//! 主循环大约每 tick_ms（默认 100 ms）执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     if app.page == Page::Menu { app.refresh_menu() }    // 菜单行随系统状态变化
//!     terminal.draw(|f| view::render(&app, f))            // 渲染 UI
//!     if app.should_quit { break }                        // 检查 APP 是否应该退出
//!     if update::run_pending_action(&mut app) {           // Processing 弹窗已经画出，
//!         continue                                        // 现在才执行阻塞动作
//!     }
//!     app.expire_status(Instant::now())                   // 清除过期弹窗，不 sleep
//!     if let Some(event) = poll_event(tick)? {            // 轮询获取输入，最多等待 tick
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//! }

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::{App, Page};
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, tick: Duration) -> Result<()> {
    loop {
        // 1. 重新采样系统状态（仅主菜单需要）
        if app.page == Page::Menu && app.pending_action.is_none() {
            app.refresh_menu();
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 执行已显示 Processing 的动作
        if update::run_pending_action(app) {
            continue;
        }

        // 5. 清除过期弹窗
        app.expire_status(Instant::now());

        // 6. 轮询事件
        if let Some(event) = event::poll_event(tick)? {
            // 7. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 8. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
