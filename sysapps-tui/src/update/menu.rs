//! 主菜单消息处理

use sysapps_core::{MenuAction, TransientStatus};

use crate::message::MenuMessage;
use crate::model::{App, Page};

/// 处理主菜单消息
pub fn update(app: &mut App, msg: MenuMessage) {
    match msg {
        MenuMessage::Move(direction) => {
            app.menu.move_by(direction.delta());
        }
        MenuMessage::Activate => {
            let Some(action) = app.menu.activate() else {
                return;
            };

            if action == MenuAction::OpenManuals {
                open_manuals(app);
                return;
            }

            // 先显示 Processing，下一帧绘制后由主循环执行
            app.set_status(TransientStatus::processing(app.menu.labels().processing));
            app.pending_action = Some(action);
        }
        MenuMessage::Back => {}
    }
}

/// 切换到手册浏览器（重新读取当前目录）
pub fn open_manuals(app: &mut App) {
    app.browser.reload();
    app.page = Page::Manuals;
}
