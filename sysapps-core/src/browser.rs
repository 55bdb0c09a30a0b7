//! Hierarchical manual browser
//!
//! ```text
//!   Listing ──activate(dir)──▶ Listing (depth + 1)
//!      │  ◀────────back──────────┘
//!      │
//!      ├──activate(doc)──▶ DocumentOverview ──activate(section)──▶ SectionDetail
//!      │  ◀──────back────────┘  ◀──────────────back───────────────────┘
//!      │
//!      └──back at root──▶ ExitBrowser
//! ```
//!
//! Every directory level is a frame on a navigation stack holding its own
//! rows, cursor and scroll. Going back pops the frame and restores the
//! parent exactly as it was left, unless the directory changed on disk.

use std::sync::Arc;

use crate::paged_list::PagedList;
use crate::presentation::{Body, LegendButton, LegendItem, RowIcon, Screen, TextView};
use crate::traits::TreeStore;
use crate::types::{render_section, sort_entries, Document, EntryKind, Row, RowList, TreeEntry};

/// Browser tuning, taken from the application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Rows per page in listings and document overviews
    pub page_size: usize,
    /// Lines moved per scroll step in a section
    pub content_scroll_step: usize,
    /// Lines of section text visible at once
    pub content_viewport_lines: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: 7,
            content_scroll_step: 1,
            content_viewport_lines: 13,
        }
    }
}

/// Display strings for the browser screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserLabels {
    pub title: &'static str,
    pub back: &'static str,
    pub select: &'static str,
    pub scroll: &'static str,
    pub empty_directory: &'static str,
    pub empty_document: &'static str,
}

impl BrowserLabels {
    pub const ENGLISH: BrowserLabels = BrowserLabels {
        title: "Manual Reader",
        back: "Back",
        select: "Select",
        scroll: "Scroll",
        empty_directory: "No manuals here",
        empty_document: "This manual has no sections",
    };
}

impl Default for BrowserLabels {
    fn default() -> Self {
        Self::ENGLISH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMode {
    Listing,
    DocumentOverview,
    SectionDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    EnteredDirectory,
    OpenedDocument,
    OpenedSection,
    /// Nothing selectable, or already at the deepest level
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    ClosedSection,
    ClosedDocument,
    LeftDirectory,
    /// Back pressed at the root listing; the caller leaves the browser.
    ExitBrowser,
}

/// One level of the navigation stack
#[derive(Debug, Clone)]
struct DirectoryFrame {
    name: String,
    list: PagedList<TreeEntry>,
}

#[derive(Debug, Clone)]
struct OpenDocument {
    name: String,
    document: Document,
    sections: PagedList<String>,
    section: Option<SectionView>,
}

/// A rendered section and its line scroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    title: String,
    lines: Vec<String>,
    scroll: usize,
}

impl SectionView {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self, viewport_lines: usize) -> usize {
        self.lines.len().saturating_sub(viewport_lines.max(1))
    }

    /// Scroll by `step` lines in the direction of `delta`, clamped to the text.
    pub fn scroll_by(&mut self, delta: i32, step: usize, viewport_lines: usize) {
        let max = self.max_scroll(viewport_lines);
        self.scroll = match delta.signum() {
            1 => self.scroll.saturating_add(step).min(max),
            -1 => self.scroll.saturating_sub(step),
            _ => self.scroll.min(max),
        };
    }

    pub fn view(&self, viewport_lines: usize) -> TextView {
        let len = self.lines.len();
        let start = self.scroll.min(len);
        let end = (start + viewport_lines.max(1)).min(len);
        TextView {
            lines: self.lines[start..end].to_vec(),
            more_above: start > 0,
            more_below: end < len,
        }
    }
}

/// Manual browser state
pub struct ManualBrowser {
    store: Arc<dyn TreeStore>,
    config: BrowserConfig,
    labels: BrowserLabels,
    root: DirectoryFrame,
    /// Frames below the root; the root itself is never popped.
    stack: Vec<DirectoryFrame>,
    document: Option<OpenDocument>,
}

impl ManualBrowser {
    /// Create a browser positioned on the root listing.
    pub fn new(store: Arc<dyn TreeStore>, config: BrowserConfig, labels: BrowserLabels) -> Self {
        let mut browser = Self {
            store,
            config,
            labels,
            root: DirectoryFrame {
                name: String::new(),
                list: PagedList::new(config.page_size),
            },
            stack: Vec::new(),
            document: None,
        };
        let rows = browser.read_listing(&[]);
        browser.root.list.reset(rows);
        browser
    }

    pub fn mode(&self) -> BrowserMode {
        match &self.document {
            Some(OpenDocument {
                section: Some(_), ..
            }) => BrowserMode::SectionDetail,
            Some(_) => BrowserMode::DocumentOverview,
            None => BrowserMode::Listing,
        }
    }

    /// Number of directories entered below the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// `"/"` at the root, otherwise `"/a/b"`.
    pub fn current_path(&self) -> String {
        format!("/{}", self.path().join("/"))
    }

    pub fn listing(&self) -> &PagedList<TreeEntry> {
        &self.current_frame().list
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document.as_ref().map(|doc| doc.name.as_str())
    }

    pub fn sections(&self) -> Option<&PagedList<String>> {
        self.document.as_ref().map(|doc| &doc.sections)
    }

    pub fn section(&self) -> Option<&SectionView> {
        self.document.as_ref().and_then(|doc| doc.section.as_ref())
    }

    pub fn move_by(&mut self, delta: i32) {
        let step = self.config.content_scroll_step.max(1);
        let lines = self.config.content_viewport_lines;
        match self.document.as_mut() {
            Some(doc) => match doc.section.as_mut() {
                Some(section) => section.scroll_by(delta, step, lines),
                None => doc.sections.move_by(delta),
            },
            None => self.current_frame_mut().list.move_by(delta),
        }
    }

    pub fn activate(&mut self) -> ActivateOutcome {
        match self.mode() {
            BrowserMode::SectionDetail => ActivateOutcome::Ignored,
            BrowserMode::DocumentOverview => self.open_section(),
            BrowserMode::Listing => {
                let Some(entry) = self.current_frame().list.activate() else {
                    return ActivateOutcome::Ignored;
                };
                match entry.kind {
                    EntryKind::Directory => self.enter_directory(entry.name),
                    EntryKind::Document => self.open_document(entry.name),
                }
            }
        }
    }

    pub fn back(&mut self) -> BackOutcome {
        if let Some(doc) = self.document.as_mut() {
            if doc.section.take().is_some() {
                log::debug!("Closed section");
                return BackOutcome::ClosedSection;
            }
            self.document = None;
            log::debug!("Closed document");
            return BackOutcome::ClosedDocument;
        }

        if let Some(frame) = self.stack.pop() {
            log::debug!("Left directory {}", frame.name);
            self.reload();
            return BackOutcome::LeftDirectory;
        }

        BackOutcome::ExitBrowser
    }

    /// Re-read the current directory. Cursor and scroll survive unless the
    /// number of entries changed.
    pub fn reload(&mut self) {
        let rows = self.read_listing(&self.path());
        self.current_frame_mut().list.replace_rows(rows);
    }

    pub fn screen(&self) -> Screen {
        let l = &self.labels;
        let select = vec![
            LegendItem::new(LegendButton::Back, l.back),
            LegendItem::new(LegendButton::Confirm, l.select),
        ];

        let (subtitle, body, legend) = match &self.document {
            Some(doc) => {
                let subtitle = self.document_path(&doc.name);
                match &doc.section {
                    Some(section) => {
                        let text = section.view(self.config.content_viewport_lines);
                        let legend = vec![
                            LegendItem::new(LegendButton::Back, l.back),
                            LegendItem::new(LegendButton::Scroll, l.scroll),
                        ];
                        (subtitle, Body::Text(text), legend)
                    }
                    None if doc.sections.is_empty() => {
                        (subtitle, Body::Empty(l.empty_document.to_string()), select)
                    }
                    None => {
                        let view = doc.sections.view_with(|_| Some(RowIcon::Section));
                        (subtitle, Body::List(view), select)
                    }
                }
            }
            None => {
                let list = &self.current_frame().list;
                let body = if list.is_empty() {
                    Body::Empty(l.empty_directory.to_string())
                } else {
                    Body::List(list.view_with(|entry| {
                        Some(match entry.kind {
                            EntryKind::Directory => RowIcon::Folder,
                            EntryKind::Document => RowIcon::Document,
                        })
                    }))
                };
                (self.current_path(), body, select)
            }
        };

        Screen {
            title: l.title.to_string(),
            subtitle: Some(subtitle),
            status_lines: Vec::new(),
            body,
            legend,
            overlay: None,
        }
    }

    fn enter_directory(&mut self, name: String) -> ActivateOutcome {
        let mut path = self.path();
        path.push(name.clone());
        let rows = self.read_listing(&path);
        log::debug!("Entered directory /{}", path.join("/"));

        self.stack.push(DirectoryFrame {
            name,
            list: PagedList::with_rows(rows, self.config.page_size),
        });
        ActivateOutcome::EnteredDirectory
    }

    fn open_document(&mut self, name: String) -> ActivateOutcome {
        let document = self.read_document(&name);
        let rows: RowList<String> = document
            .section_names()
            .map(|section| Row::new(section, section.to_string()))
            .collect();
        log::debug!("Opened document {name} ({} sections)", rows.len());

        self.document = Some(OpenDocument {
            name,
            document,
            sections: PagedList::with_rows(rows, self.config.page_size),
            section: None,
        });
        ActivateOutcome::OpenedDocument
    }

    fn open_section(&mut self) -> ActivateOutcome {
        let Some(doc) = self.document.as_mut() else {
            return ActivateOutcome::Ignored;
        };
        let Some(name) = doc.sections.activate() else {
            return ActivateOutcome::Ignored;
        };
        let lines = render_section(&name, doc.document.section(&name));
        doc.section = Some(SectionView::new(name, lines));
        ActivateOutcome::OpenedSection
    }

    fn read_listing(&self, path: &[String]) -> RowList<TreeEntry> {
        match self.store.list_children(path) {
            Ok(mut entries) => {
                sort_entries(&mut entries);
                entries
                    .into_iter()
                    .map(|entry| Row::new(entry.name.clone(), entry))
                    .collect()
            }
            Err(e) => {
                log::warn!("Failed to list /{}: {e}", path.join("/"));
                RowList::empty()
            }
        }
    }

    fn read_document(&self, name: &str) -> Document {
        self.store
            .load_document(&self.path(), name)
            .unwrap_or_else(|e| {
                log::warn!("Failed to load manual {name}: {e}");
                Document::default()
            })
    }

    fn path(&self) -> Vec<String> {
        self.stack.iter().map(|frame| frame.name.clone()).collect()
    }

    fn document_path(&self, name: &str) -> String {
        if self.stack.is_empty() {
            format!("/{name}")
        } else {
            format!("{}/{name}", self.current_path())
        }
    }

    fn current_frame(&self) -> &DirectoryFrame {
        self.stack.last().unwrap_or(&self.root)
    }

    fn current_frame_mut(&mut self) -> &mut DirectoryFrame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }
}
