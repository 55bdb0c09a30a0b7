//! 应用主状态结构

use std::time::{Duration, Instant};

use sysapps_core::{ActionDispatcher, ManualBrowser, MenuAction, Screen, ServiceMenu, TransientStatus};

use crate::backend::{AppConfig, CoreService};
use crate::i18n::t;

use super::Page;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    /// 系统服务菜单
    pub menu: ServiceMenu,

    /// 手册浏览器
    pub browser: ManualBrowser,

    /// 动作分发器
    pub dispatcher: ActionDispatcher,

    /// 全屏状态弹窗
    pub status: Option<TransientStatus>,

    /// 已显示 “Processing” 弹窗、等待执行的动作
    pub pending_action: Option<MenuAction>,

    /// 结果弹窗停留时间
    pub status_dwell: Duration,

    /// 以 `sysapps manuals` 启动时，浏览器根目录按返回直接退出
    pub standalone_manuals: bool,

    core: CoreService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(core: CoreService, config: &AppConfig, standalone_manuals: bool) -> Self {
        let texts = t();
        let browser_config = config.browser_config();

        let mut app = Self {
            should_quit: false,
            page: if standalone_manuals {
                Page::Manuals
            } else {
                Page::Menu
            },
            menu: ServiceMenu::new(browser_config.page_size, texts.menu),
            browser: core.browser(browser_config, texts.manuals),
            dispatcher: core.dispatcher(texts.menu),
            status: None,
            pending_action: None,
            status_dwell: config.status_dwell(),
            standalone_manuals,
            core,
        };

        app.refresh_menu();
        app
    }

    /// 重新采样系统状态并重建菜单行
    pub fn refresh_menu(&mut self) {
        let snapshot = self.core.snapshot();
        self.menu.refresh(snapshot);
    }

    /// 设置状态弹窗
    pub fn set_status(&mut self, status: TransientStatus) {
        self.status = Some(status);
    }

    /// 清除已过期的状态弹窗（Processing 没有截止时间，不会被清除）
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    /// 当前页面的一帧
    pub fn screen(&self) -> Screen {
        let screen = match self.page {
            Page::Menu => self.menu.screen(),
            Page::Manuals => self.browser.screen(),
        };
        screen.with_status(self.status.as_ref())
    }
}
