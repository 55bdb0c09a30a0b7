//! 简体中文翻译 (zh-CN)

use sysapps_core::{BrowserLabels, MenuLabels};

use super::keys::{CommonTexts, HintTexts, KeyNames, StatusTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "系统应用",
        more_above: "▲ 更多",
        more_below: "▼ 更多",
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
    // 主菜单
    // ========================================================================
    menu: MenuLabels {
        title: "系统应用",
        enable_ssh: "启用 SSH",
        disable_ssh: "停用 SSH",
        enable_scp: "启用 SCP",
        disable_scp: "停用 SCP",
        show_ram: "内存状态",
        show_battery: "电池状态",
        show_network: "网络状态",
        open_manuals: "使用手册",
        ssh: "SSH",
        scp: "SCP",
        battery: "电池",
        ip: "IP",
        ram: "内存",
        active: "运行中",
        inactive: "未运行",
        unavailable: "不可用",
        processing: "处理中...",
        completed: "完成",
        select: "选择",
        exit: "退出",
        no_actions: "没有可用的操作",
    },

    // ========================================================================
    // 手册浏览器
    // ========================================================================
    manuals: BrowserLabels {
        title: "手册阅读器",
        back: "返回",
        select: "选择",
        scroll: "滚动",
        empty_directory: "此目录下没有手册",
        empty_document: "此手册没有章节",
    },

    // ========================================================================
    // 状态提示
    // ========================================================================
    status: StatusTexts {
        action_failed: "失败",
    },
};
