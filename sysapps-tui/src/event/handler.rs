//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{Button, DefaultKeymap};
use crate::message::{AppMessage, BrowserMessage, Direction, MenuMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app.page),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, page: Page) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    let Some(button) = DefaultKeymap::button(&key) else {
        return AppMessage::Noop;
    };

    match (page, button) {
        (_, Button::Exit) => AppMessage::Quit,

        (Page::Menu, Button::Up) => AppMessage::Menu(MenuMessage::Move(Direction::Up)),
        (Page::Menu, Button::Down) => AppMessage::Menu(MenuMessage::Move(Direction::Down)),
        (Page::Menu, Button::Confirm) => AppMessage::Menu(MenuMessage::Activate),
        (Page::Menu, Button::Back) => AppMessage::Menu(MenuMessage::Back),

        (Page::Manuals, Button::Up) => AppMessage::Browser(BrowserMessage::Move(Direction::Up)),
        (Page::Manuals, Button::Down) => {
            AppMessage::Browser(BrowserMessage::Move(Direction::Down))
        }
        (Page::Manuals, Button::Confirm) => AppMessage::Browser(BrowserMessage::Activate),
        (Page::Manuals, Button::Back) => AppMessage::Browser(BrowserMessage::Back),
    }
}
