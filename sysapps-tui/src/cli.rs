//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sysapps")]
#[command(about = "Service menu and manual reader for handheld consoles")]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/sysapps/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Manuals root directory
    #[arg(long, value_name = "DIR")]
    pub manuals: Option<PathBuf>,

    /// Directory holding the service toggle scripts
    #[arg(long, value_name = "DIR")]
    pub scripts: Option<PathBuf>,

    /// Log file (default: <cache dir>/sysapps/sysapps.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Service menu (default)
    Menu,
    /// Manual reader only; Back at the top level exits
    Manuals,
}

impl Cli {
    /// 是否以独立手册阅读器启动
    pub fn standalone_manuals(&self) -> bool {
        self.command == Some(Command::Manuals)
    }
}
