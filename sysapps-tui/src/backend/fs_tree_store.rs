//! 文件系统手册树
//!
//! 目录即分类，`*.json` 文件即手册（手册名为去掉扩展名的文件名）。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sysapps_core::{sort_entries, CoreError, CoreResult, Document, TreeEntry, TreeStore};

/// 基于目录的手册树存储
pub struct FsTreeStore {
    root: PathBuf,
}

impl FsTreeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 确保根目录存在（首次运行时创建）
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir_path(&self, path: &[String]) -> PathBuf {
        path.iter().fold(self.root.clone(), |dir, segment| dir.join(segment))
    }
}

impl TreeStore for FsTreeStore {
    fn list_children(&self, path: &[String]) -> CoreResult<Vec<TreeEntry>> {
        let dir = self.dir_path(path);
        let read_dir = fs::read_dir(&dir).map_err(|e| CoreError::io(&dir, e))?;

        let mut entries = collect_entries(&dir, read_dir.map(|entry| entry.map(|e| e.path())));
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn load_document(&self, path: &[String], name: &str) -> CoreResult<Document> {
        let file = self.dir_path(path).join(format!("{name}.json"));
        let text = fs::read_to_string(&file).map_err(|e| CoreError::io(&file, e))?;
        Document::from_json(&file, &text)
    }
}

/// 把目录项转换为手册树节点，读取失败的单个目录项跳过
fn collect_entries(
    dir: &Path,
    paths: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    for entry_path in paths {
        let entry_path = match entry_path {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        let Some(name) = entry_path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        // 隐藏文件不显示
        if name.starts_with('.') {
            continue;
        }

        if entry_path.is_dir() {
            entries.push(TreeEntry::directory(name));
        } else if entry_path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = entry_path.file_stem() {
                entries.push(TreeEntry::document(stem.to_string_lossy()));
            }
        }
    }
    entries
}
