//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sysapps_core::BrowserConfig;

use crate::view::theme::Theme;

/// 应用配置
///
/// 配置文件中缺失的字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 手册根目录
    pub manuals_root: PathBuf,
    /// 服务脚本目录
    pub scripts_dir: PathBuf,
    /// 每页行数
    pub page_size: usize,
    /// 章节正文每次滚动的行数
    pub content_scroll_step: usize,
    /// 章节正文可见行数
    pub content_viewport_lines: usize,
    /// 状态提示停留时间（毫秒）
    pub status_dwell_ms: u64,
    /// 事件轮询超时（毫秒）
    pub tick_ms: u64,
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manuals_root: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sysapps")
                .join("manuals"),
            scripts_dir: PathBuf::from("/usr/share/sysapps/scripts"),
            page_size: 7,
            content_scroll_step: 1,
            content_viewport_lines: 13,
            status_dwell_ms: 2000,
            tick_ms: 100,
            language: "en-US".to_string(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 浏览器参数
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            page_size: self.page_size.max(1),
            content_scroll_step: self.content_scroll_step.max(1),
            content_viewport_lines: self.content_viewport_lines.max(1),
        }
    }

    pub fn status_dwell(&self) -> Duration {
        Duration::from_millis(self.status_dwell_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径：`<config dir>/sysapps/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sysapps")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }
}
