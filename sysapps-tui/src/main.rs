//! System Apps TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 文件系统、系统查询与脚本执行 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     init_logging()          // 日志写入文件（stdout 属于终端界面）
//!     load_config()           // 读取配置文件，命令行参数覆盖
//!     set_language / set_theme_index
//!     App::new()              // 创建 APP 实例
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use clap::Parser;

use backend::{AppConfig, ConfigService, CoreService, JsonConfigService};
use cli::Cli;
use i18n::{set_language, Language};
use util::{default_log_path, init_logging, init_terminal, restore_terminal};
use view::theme::set_theme_index;

fn main() -> Result<()> {
    // 1. 命令行参数
    let cli = Cli::parse();

    // 2. 日志
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("sysapps: logging disabled: {e:#}");
    }
    tracing::info!("Starting sysapps {}", env!("CARGO_PKG_VERSION"));

    // 3. 配置
    let config = load_config(&cli);

    match Language::from_code(&config.language) {
        Some(lang) => {
            log::info!("Language: {}", lang.code());
            set_language(lang);
        }
        None => log::warn!("Unknown language {:?}, using en-US", config.language),
    }
    set_theme_index(config.theme.index());

    // 4. 创建应用实例
    let core = CoreService::new(&config);
    let mut app = model::App::new(core, &config, cli.standalone_manuals());

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, config.tick());

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}

/// 读取配置文件并应用命令行覆盖；配置文件损坏时使用默认值
fn load_config(cli: &Cli) -> AppConfig {
    let service = JsonConfigService::new(
        cli.config
            .clone()
            .unwrap_or_else(JsonConfigService::default_path),
    );

    let mut config = service.load().unwrap_or_else(|e| {
        log::warn!("{e:#}; using default settings");
        AppConfig::default()
    });

    if let Some(manuals) = &cli.manuals {
        config.manuals_root.clone_from(manuals);
    }
    if let Some(scripts) = &cli.scripts {
        config.scripts_dir.clone_from(scripts);
    }

    log::info!(
        "Config: {} (manuals {}, scripts {})",
        service.path().display(),
        config.manuals_root.display(),
        config.scripts_dir.display()
    );
    config
}
