//! 手册浏览器消息处理

use sysapps_core::BackOutcome;

use crate::message::BrowserMessage;
use crate::model::{App, Page};

/// 处理手册浏览器消息
pub fn update(app: &mut App, msg: BrowserMessage) {
    match msg {
        BrowserMessage::Move(direction) => {
            app.browser.move_by(direction.delta());
        }
        BrowserMessage::Activate => {
            let outcome = app.browser.activate();
            log::debug!("Browser activate: {outcome:?}");
        }
        BrowserMessage::Back => {
            if app.browser.back() == BackOutcome::ExitBrowser {
                if app.standalone_manuals {
                    app.should_quit = true;
                } else {
                    app.page = Page::Menu;
                }
            }
        }
    }
}
