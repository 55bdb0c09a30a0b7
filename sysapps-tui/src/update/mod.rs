//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod action;             // 阻塞动作的执行与结果弹窗
//!         mod browser;            // 手册浏览器子消息处理
//!         mod menu;               // 主菜单子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!         pub use action::run_pending_action;
//!
//!
//!     状态弹窗显示期间，导航消息不会到达菜单或浏览器：
//!         - Confirm / Back 只关闭弹窗
//!         - Up / Down 被忽略
//!         - Quit 照常退出
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 动作执行（action.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     菜单 Activate 只登记 pending_action 并显示 Processing 弹窗，
//!     真正的执行在主循环绘制完这一帧之后：
//!
//!         run_pending_action(app)
//!             │
//!             ├─ Completed { message } ─▶ Success / Info 弹窗
//!             ├─ Failed { error }      ─▶ Error 弹窗（日志已由分发器记录）
//!             └─ OpenManuals           ─▶ 切换到 Page::Manuals
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod action;
mod browser;
mod menu;

use crate::message::{AppMessage, BrowserMessage, MenuMessage};
use crate::model::App;

pub use action::run_pending_action;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        // 弹窗显示期间：确认 / 返回只关闭弹窗
        AppMessage::Menu(_) | AppMessage::Browser(_) if app.status.is_some() => {
            if matches!(
                msg,
                AppMessage::Menu(MenuMessage::Activate | MenuMessage::Back)
                    | AppMessage::Browser(BrowserMessage::Activate | BrowserMessage::Back)
            ) {
                app.status = None;
            }
        }

        AppMessage::Menu(menu_msg) => {
            menu::update(app, menu_msg);
        }

        AppMessage::Browser(browser_msg) => {
            browser::update(app, browser_msg);
        }

        AppMessage::Noop => {}
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use sysapps_core::{StatusKind, TransientStatus};

    use super::test_support::{app_with, manuals_dir, StubRunner};
    use super::*;
    use crate::message::Direction;

    #[test]
    fn test_quit() {
        let dir = manuals_dir();
        let mut app = app_with(&dir, Arc::new(StubRunner::default()), false);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_overlay_swallows_navigation() {
        let dir = manuals_dir();
        let mut app = app_with(&dir, Arc::new(StubRunner::default()), false);
        app.set_status(TransientStatus::info(
            "RAM",
            std::time::Instant::now(),
            std::time::Duration::from_secs(2),
        ));

        update(&mut app, AppMessage::Menu(MenuMessage::Move(Direction::Down)));
        assert_eq!(app.menu.list().cursor(), Some(0));
        assert_eq!(app.status.as_ref().map(TransientStatus::kind), Some(StatusKind::Info));

        update(&mut app, AppMessage::Menu(MenuMessage::Activate));
        assert!(app.status.is_none());
        assert!(app.pending_action.is_none());
    }

    #[test]
    fn test_back_dismisses_overlay_on_menu() {
        let dir = manuals_dir();
        let mut app = app_with(&dir, Arc::new(StubRunner::default()), false);
        app.set_status(TransientStatus::info(
            "RAM",
            std::time::Instant::now(),
            std::time::Duration::from_secs(2),
        ));

        let esc = crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Esc,
            crossterm::event::KeyModifiers::NONE,
        ));
        let msg = crate::event::handle_event(esc, &app);
        assert_eq!(msg, AppMessage::Menu(MenuMessage::Back));

        update(&mut app, msg);
        assert!(app.status.is_none());
        assert_eq!(app.page, crate::model::Page::Menu);
        assert!(!app.should_quit);

        // 没有弹窗时主菜单上的返回不做任何事
        update(&mut app, AppMessage::Menu(MenuMessage::Back));
        assert_eq!(app.page, crate::model::Page::Menu);
        assert_eq!(app.menu.list().cursor(), Some(0));
        assert!(app.status.is_none());
    }
}
