//! Manual tree types

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Column width used when wrapping section text.
pub const SECTION_WRAP_WIDTH: usize = 50;

/// Kind of a manual tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Directory,
    Document,
}

/// A child of a manual directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn document(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Document,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Sort a listing: directories first, then documents, each group lexicographic.
pub fn sort_entries(entries: &mut [TreeEntry]) {
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
}

/// Step label → step text, in file order.
///
/// Steps are normally strings. Other JSON values are kept and shown as
/// compact JSON, so one odd step does not make the whole manual unreadable.
pub type Section = IndexMap<String, Value>;

/// The value stored under a section name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Steps(Section),
    /// Anything that is not an object, rendered as a single paragraph.
    Raw(Value),
}

/// A manual: section name → steps, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, SectionBody>,
}

impl Document {
    /// Parse a manual file's contents. `path` is only used for the error.
    pub fn from_json(path: &Path, text: &str) -> CoreResult<Self> {
        serde_json::from_str(text).map_err(|e| CoreError::InvalidDocument {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn section(&self, name: &str) -> Option<&SectionBody> {
        self.sections.get(name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromIterator<(String, Section)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Section)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(name, steps)| (name, SectionBody::Steps(steps)))
                .collect(),
        }
    }
}

/// Render one section into display lines.
///
/// Layout: title, blank line, then per step the wrapped label, the wrapped
/// text (newlines folded into spaces) and a blank separator.
pub fn render_section(title: &str, body: Option<&SectionBody>) -> Vec<String> {
    let mut lines = vec![title.to_string(), String::new()];

    match body {
        Some(SectionBody::Steps(steps)) => {
            for (label, value) in steps {
                lines.extend(wrap(label));
                lines.extend(wrap_text(value));
                lines.push(String::new());
            }
        }
        Some(SectionBody::Raw(Value::Null)) | None => {}
        Some(SectionBody::Raw(value)) => {
            lines.extend(wrap_text(value));
            lines.push(String::new());
        }
    }

    lines
}

fn step_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn wrap_text(value: &Value) -> Vec<String> {
    let text = step_text(value).replace('\n', " ");
    wrap(text.trim())
}

fn wrap(text: &str) -> Vec<String> {
    textwrap::wrap(text, SECTION_WRAP_WIDTH)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}
