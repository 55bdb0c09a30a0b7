//! 英文翻译 (en-US)

use sysapps_core::{BrowserLabels, MenuLabels};

use super::keys::{CommonTexts, HintTexts, KeyNames, StatusTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "System Apps",
        more_above: "▲ more",
        more_below: "▼ more",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            confirm: "Enter",
            back: "Esc",
            exit: "q",
            scroll: "↑↓",
        },
    },

    // ========================================================================
    // 主菜单 / 手册浏览器（核心库内置英文）
    // ========================================================================
    menu: MenuLabels::ENGLISH,
    manuals: BrowserLabels::ENGLISH,

    // ========================================================================
    // 状态提示
    // ========================================================================
    status: StatusTexts {
        action_failed: "Failed",
    },
};
