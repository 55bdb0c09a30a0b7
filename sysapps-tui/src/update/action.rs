//! 阻塞动作的执行

use std::time::Instant;

use sysapps_core::{ActionOutcome, MenuAction, TransientStatus};

use crate::i18n::t;
use crate::model::App;

use super::menu::open_manuals;

/// 执行已登记的动作，并把 Processing 弹窗换成结果弹窗
///
/// 没有登记的动作时返回 `false`。
pub fn run_pending_action(app: &mut App) -> bool {
    let Some(action) = app.pending_action.take() else {
        return false;
    };

    let outcome = app.dispatcher.dispatch(action, app.menu.snapshot());
    let now = Instant::now();
    let dwell = app.status_dwell;

    app.status = match outcome {
        ActionOutcome::Completed { message } if action.is_toggle() => {
            Some(TransientStatus::success(message, now, dwell))
        }
        ActionOutcome::Completed { message } => Some(TransientStatus::info(message, now, dwell)),
        ActionOutcome::Failed { error } => {
            let text = format!("{}: {error}", t().status.action_failed);
            Some(TransientStatus::error(text, now, dwell))
        }
        ActionOutcome::OpenManuals => {
            open_manuals(app);
            None
        }
    };

    // 开关动作改变了系统状态
    if action.is_toggle() || action == MenuAction::OpenManuals {
        app.refresh_menu();
    }
    true
}
