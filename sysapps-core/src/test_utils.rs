//! 测试工具模块
//!
//! 提供 Mock 实现用于单元测试

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::traits::{ScriptRunner, SystemProbe, TreeStore};
use crate::types::{Document, MemoryInfo, Section, TreeEntry};

// ============ Mock TreeStore ============

/// 内存手册树
///
/// 目录以路径段拼接的 `/a/b` 为键，根目录为 `/`。
#[derive(Default)]
pub struct MockTreeStore {
    listings: RwLock<HashMap<String, Vec<TreeEntry>>>,
    documents: RwLock<HashMap<String, Document>>,
    broken: RwLock<HashSet<String>>,
}

fn key(path: &[String]) -> String {
    format!("/{}", path.join("/"))
}

fn doc_key(path: &[String], name: &str) -> String {
    if path.is_empty() {
        format!("/{name}")
    } else {
        format!("{}/{name}", key(path))
    }
}

impl MockTreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置目录内容（`dir` 形如 `/` 或 `/a/b`）
    pub fn with_dir(self, dir: &str, entries: Vec<TreeEntry>) -> Self {
        self.set_dir(dir, entries);
        self
    }

    pub fn with_document(self, file: &str, sections: &[(&str, &[(&str, &str)])]) -> Self {
        let document = sections
            .iter()
            .map(|(name, steps)| {
                let section: Section = steps
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).into()))
                    .collect();
                ((*name).to_string(), section)
            })
            .collect();
        self.documents
            .write()
            .unwrap()
            .insert(file.to_string(), document);
        self
    }

    /// 让某个目录或手册读取失败
    pub fn with_broken(self, path: &str) -> Self {
        self.broken.write().unwrap().insert(path.to_string());
        self
    }

    /// 测试运行中修改目录内容
    pub fn set_dir(&self, dir: &str, entries: Vec<TreeEntry>) {
        self.listings
            .write()
            .unwrap()
            .insert(dir.to_string(), entries);
    }

    fn is_broken(&self, key: &str) -> bool {
        self.broken.read().unwrap().contains(key)
    }
}

impl TreeStore for MockTreeStore {
    fn list_children(&self, path: &[String]) -> CoreResult<Vec<TreeEntry>> {
        let key = key(path);
        if self.is_broken(&key) {
            return Err(CoreError::io(
                &key,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        Ok(self
            .listings
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }

    fn load_document(&self, path: &[String], name: &str) -> CoreResult<Document> {
        let key = doc_key(path, name);
        if self.is_broken(&key) {
            return Err(CoreError::InvalidDocument {
                path: PathBuf::from(&key),
                message: "expected an object".to_string(),
            });
        }
        self.documents
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| {
                CoreError::io(&key, std::io::Error::from(std::io::ErrorKind::NotFound))
            })
    }
}

// ============ Mock SystemProbe ============

#[derive(Default)]
pub struct MockSystemProbe {
    ssh: bool,
    scp_config: bool,
    battery: Option<u8>,
    ip: Option<String>,
    memory: Option<MemoryInfo>,
}

impl MockSystemProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ssh(mut self, active: bool) -> Self {
        self.ssh = active;
        self
    }

    pub fn with_scp_config(mut self, enabled: bool) -> Self {
        self.scp_config = enabled;
        self
    }

    pub fn with_battery(mut self, percent: Option<u8>) -> Self {
        self.battery = percent;
        self
    }

    pub fn with_ip(mut self, ip: Option<&str>) -> Self {
        self.ip = ip.map(str::to_string);
        self
    }

    pub fn with_memory(mut self, memory: Option<MemoryInfo>) -> Self {
        self.memory = memory;
        self
    }
}

impl SystemProbe for MockSystemProbe {
    fn ssh_active(&self) -> bool {
        self.ssh
    }

    fn scp_enabled(&self) -> bool {
        self.scp_config
    }

    fn battery_percent(&self) -> Option<u8> {
        self.battery
    }

    fn ip_address(&self) -> Option<String> {
        self.ip.clone()
    }

    fn memory(&self) -> Option<MemoryInfo> {
        self.memory
    }
}

// ============ Mock ScriptRunner ============

/// 记录调用的脚本执行器
#[derive(Default)]
pub struct MockScriptRunner {
    calls: Mutex<Vec<String>>,
    missing: HashSet<String>,
    exit_codes: HashMap<String, i32>,
}

impl MockScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(mut self, script: &str) -> Self {
        self.missing.insert(script.to_string());
        self
    }

    pub fn with_exit_code(mut self, script: &str, code: i32) -> Self {
        self.exit_codes.insert(script.to_string(), code);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScriptRunner for MockScriptRunner {
    fn run(&self, script: &str) -> CoreResult<()> {
        self.calls.lock().unwrap().push(script.to_string());

        if self.missing.contains(script) {
            return Err(CoreError::ScriptMissing(PathBuf::from(script)));
        }
        match self.exit_codes.get(script) {
            Some(&code) if code != 0 => Err(CoreError::ScriptFailed {
                script: script.to_string(),
                code: Some(code),
            }),
            _ => Ok(()),
        }
    }
}
