//! Presentation model
//!
//! Everything a renderer needs to paint one frame. Renderers draw it
//! verbatim and hold no navigation state of their own.

use crate::status::{StatusKind, TransientStatus};

/// One frame's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub subtitle: Option<String>,
    pub status_lines: Vec<String>,
    pub body: Body,
    pub legend: Vec<LegendItem>,
    pub overlay: Option<Overlay>,
}

impl Screen {
    /// Attach the transient status, if any, as a full-screen overlay.
    #[must_use]
    pub fn with_status(mut self, status: Option<&TransientStatus>) -> Self {
        self.overlay = status.map(Overlay::from);
        self
    }
}

/// Main area content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    List(ListView),
    Text(TextView),
    /// Nothing selectable; carries the placeholder message.
    Empty(String),
}

/// Visible slice of a paged list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ListRow>,
    pub more_above: bool,
    pub more_below: bool,
}

impl ListView {
    pub fn selected(&self) -> Option<&ListRow> {
        self.rows.iter().find(|row| row.selected)
    }
}

/// Icon drawn in front of a row label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    Folder,
    Document,
    Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub label: String,
    pub icon: Option<RowIcon>,
    pub selected: bool,
}

/// Visible window of a scrolled text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextView {
    pub lines: Vec<String>,
    pub more_above: bool,
    pub more_below: bool,
}

/// Physical button a legend entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendButton {
    Confirm,
    Back,
    Exit,
    Scroll,
}

/// Button hint shown in the legend bar, e.g. (Confirm, "Select")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub button: LegendButton,
    pub label: String,
}

impl LegendItem {
    pub fn new(button: LegendButton, label: impl Into<String>) -> Self {
        Self {
            button,
            label: label.into(),
        }
    }
}

/// Full-screen transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub kind: StatusKind,
    pub text: String,
}

impl From<&TransientStatus> for Overlay {
    fn from(status: &TransientStatus) -> Self {
        Self {
            kind: status.kind(),
            text: status.text().to_string(),
        }
    }
}
