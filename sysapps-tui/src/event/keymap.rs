//! 快捷键配置
//!
//! 把具体按键归一为设备上的逻辑按钮

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 逻辑按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Confirm,
    Back,
    Exit,
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    pub const UP: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const DOWN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const CONFIRM: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Enter),
        KeyBinding::key(KeyCode::Char(' ')),
        KeyBinding::key(KeyCode::Char('a')),
    ];
    pub const BACK: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::key(KeyCode::Backspace),
        KeyBinding::key(KeyCode::Char('b')),
    ];
    pub const EXIT: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Char('q')),
        KeyBinding::key(KeyCode::F(10)),
        KeyBinding::ctrl(KeyCode::Char('c')),
    ];

    /// 查找按键对应的逻辑按钮
    pub fn button(key: &KeyEvent) -> Option<Button> {
        let table: [(&[KeyBinding], Button); 5] = [
            (Self::UP, Button::Up),
            (Self::DOWN, Button::Down),
            (Self::CONFIRM, Button::Confirm),
            (Self::BACK, Button::Back),
            (Self::EXIT, Button::Exit),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| bindings.iter().any(|b| b.matches(key)))
            .map(|(_, button)| button)
    }
}
