//! 核心服务
//!
//! 将文件系统、Linux 系统查询与脚本执行的实现注入 sysapps-core，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use sysapps_core::{
    ActionDispatcher, BrowserConfig, BrowserLabels, ManualBrowser, MenuLabels, ScriptRunner,
    SystemProbe, SystemSnapshot, TreeStore,
};

use super::config_service::AppConfig;
use super::fs_tree_store::FsTreeStore;
use super::linux_probe::LinuxProbe;
use super::script_runner::BashScriptRunner;

/// TUI 核心服务
///
/// 持有所有外部协作者的实例，提供给 UI 层调用
pub struct CoreService {
    tree_store: Arc<dyn TreeStore>,
    probe: Arc<dyn SystemProbe>,
    runner: Arc<dyn ScriptRunner>,
}

impl CoreService {
    /// 根据配置创建核心服务实例
    pub fn new(config: &AppConfig) -> Self {
        let tree_store = FsTreeStore::new(&config.manuals_root);
        // 手册根目录不存在时创建（失败时浏览器显示空目录）
        if let Err(e) = tree_store.ensure_root() {
            log::warn!(
                "Cannot create manuals root {}: {e}",
                tree_store.root().display()
            );
        }

        Self::with_collaborators(
            Arc::new(tree_store),
            Arc::new(LinuxProbe::new()),
            Arc::new(BashScriptRunner::new(&config.scripts_dir)),
        )
    }

    /// 使用自定义协作者创建（测试用）
    pub fn with_collaborators(
        tree_store: Arc<dyn TreeStore>,
        probe: Arc<dyn SystemProbe>,
        runner: Arc<dyn ScriptRunner>,
    ) -> Self {
        Self {
            tree_store,
            probe,
            runner,
        }
    }

    // ========== 系统状态 ==========

    /// 采样当前系统状态
    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot::capture(self.probe.as_ref())
    }

    // ========== 组件构建 ==========

    /// 创建动作分发器
    pub fn dispatcher(&self, labels: MenuLabels) -> ActionDispatcher {
        ActionDispatcher::new(self.probe.clone(), self.runner.clone(), labels)
    }

    /// 创建手册浏览器（定位在根目录）
    pub fn browser(&self, config: BrowserConfig, labels: BrowserLabels) -> ManualBrowser {
        ManualBrowser::new(self.tree_store.clone(), config, labels)
    }
}
