#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `ManualBrowser` navigation over a mutable in-memory tree.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use sysapps_core::{
    ActivateOutcome, BackOutcome, Body, BrowserConfig, BrowserLabels, BrowserMode, CoreError,
    CoreResult, Document, ManualBrowser, Section, TreeEntry, TreeStore,
};

// ===== Mock Implementations =====

/// Tree keyed by joined path (`""` for the root).
#[derive(Default)]
struct MemoryTree {
    dirs: RwLock<HashMap<String, Vec<TreeEntry>>>,
    docs: RwLock<HashMap<String, Document>>,
}

impl MemoryTree {
    fn set_dir(&self, path: &str, entries: Vec<TreeEntry>) {
        self.dirs.write().unwrap().insert(path.to_string(), entries);
    }

    fn set_doc(&self, path: &str, sections: &[&str]) {
        let doc: Document = sections
            .iter()
            .map(|name| {
                let mut steps = Section::new();
                steps.insert("Step".to_string(), format!("Read {name}").into());
                ((*name).to_string(), steps)
            })
            .collect();
        self.docs.write().unwrap().insert(path.to_string(), doc);
    }
}

impl TreeStore for MemoryTree {
    fn list_children(&self, path: &[String]) -> CoreResult<Vec<TreeEntry>> {
        let key = path.join("/");
        self.dirs
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| CoreError::io(&key, io::Error::from(io::ErrorKind::NotFound)))
    }

    fn load_document(&self, path: &[String], name: &str) -> CoreResult<Document> {
        let mut segments = path.to_vec();
        segments.push(name.to_string());
        let key = segments.join("/");
        self.docs
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| CoreError::io(&key, io::Error::from(io::ErrorKind::NotFound)))
    }
}

fn documents(prefix: &str, count: usize) -> Vec<TreeEntry> {
    (0..count)
        .map(|i| TreeEntry::document(format!("{prefix}{i:02}")))
        .collect()
}

/// Root: 3 directories + 9 documents, so the root listing scrolls with page size 7.
fn tree() -> Arc<MemoryTree> {
    let tree = Arc::new(MemoryTree::default());
    let mut root = vec![
        TreeEntry::directory("games"),
        TreeEntry::directory("system"),
        TreeEntry::directory("empty"),
    ];
    root.extend(documents("doc", 9));
    tree.set_dir("", root);
    tree.set_dir("games", documents("game", 4));
    tree.set_dir("system", vec![TreeEntry::directory("deep")]);
    tree.set_dir("system/deep", documents("page", 2));
    tree.set_dir("empty", Vec::new());
    tree.set_doc("doc08", &["Intro", "Usage", "Faq"]);
    tree.set_doc("system/deep/page01", &["One"]);
    tree
}

fn browser(tree: &Arc<MemoryTree>) -> ManualBrowser {
    ManualBrowser::new(tree.clone(), BrowserConfig::default(), BrowserLabels::ENGLISH)
}

fn position(browser: &ManualBrowser) -> (Option<usize>, usize) {
    let list = browser.listing();
    (list.cursor(), list.viewport().scroll_offset())
}

fn select(browser: &mut ManualBrowser, name: &str) {
    let index = browser
        .listing()
        .rows()
        .iter()
        .position(|row| row.label() == name)
        .unwrap_or_else(|| panic!("{name} not listed"));
    while browser.listing().cursor() != Some(index) {
        let delta = if browser.listing().cursor().unwrap() < index { 1 } else { -1 };
        browser.move_by(delta);
    }
}

// ===== Tests =====

#[test]
fn enter_then_back_restores_parent_exactly() {
    let tree = tree();
    let mut b = browser(&tree);

    for _ in 0..8 {
        b.move_by(1);
    }
    for _ in 0..7 {
        b.move_by(-1);
    }
    select(&mut b, "games");
    let before = position(&b);
    let rows_before = b.listing().rows().clone();

    assert_eq!(b.activate(), ActivateOutcome::EnteredDirectory);
    assert_eq!(position(&b), (Some(0), 0));
    b.move_by(1);
    b.move_by(1);

    assert_eq!(b.back(), BackOutcome::LeftDirectory);
    assert_eq!(position(&b), before);
    assert_eq!(b.listing().rows(), &rows_before);
}

#[test]
fn scrolled_parent_survives_round_trip() {
    let tree = tree();
    let mut b = browser(&tree);
    for _ in 0..9 {
        b.move_by(1);
    }
    // Scrolled down past the directories, then back up to "system".
    for _ in 0..8 {
        b.move_by(-1);
    }
    assert_eq!(b.listing().selected().unwrap().label(), "games");
    b.move_by(1);
    assert_eq!(b.listing().selected().unwrap().label(), "system");
    let before = position(&b);

    b.activate();
    b.activate();
    assert_eq!(b.current_path(), "/system/deep");
    b.back();
    b.back();

    assert_eq!(b.current_path(), "/");
    assert_eq!(position(&b), before);
}

#[test]
fn document_round_trip_keeps_listing_viewport() {
    let tree = tree();
    let mut b = browser(&tree);
    for _ in 0..11 {
        b.move_by(1);
    }
    let before = position(&b);
    assert_eq!(before, (Some(11), 5));

    assert_eq!(b.activate(), ActivateOutcome::OpenedDocument);
    assert_eq!(b.mode(), BrowserMode::DocumentOverview);
    let sections: Vec<_> = b
        .sections()
        .unwrap()
        .rows()
        .iter()
        .map(|r| r.label().to_string())
        .collect();
    assert_eq!(sections, vec!["Intro", "Usage", "Faq"]);

    b.move_by(1);
    assert_eq!(b.activate(), ActivateOutcome::OpenedSection);
    assert_eq!(b.back(), BackOutcome::ClosedSection);
    assert_eq!(b.back(), BackOutcome::ClosedDocument);

    assert_eq!(b.mode(), BrowserMode::Listing);
    assert_eq!(position(&b), before);
}

#[test]
fn empty_listing_is_inert() {
    let tree = tree();
    let mut b = browser(&tree);
    select(&mut b, "empty");
    b.activate();

    assert_eq!(b.current_path(), "/empty");
    assert_eq!(b.listing().cursor(), None);
    b.move_by(1);
    assert_eq!(b.activate(), ActivateOutcome::Ignored);
    assert_eq!(b.depth(), 1);

    match b.screen().body {
        Body::Empty(message) => assert_eq!(message, "No manuals here"),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn back_at_root_signals_exit() {
    let tree = tree();
    let mut b = browser(&tree);
    b.move_by(1);
    assert_eq!(b.back(), BackOutcome::ExitBrowser);
    assert_eq!(b.listing().cursor(), Some(1));
    assert_eq!(b.depth(), 0);
}

#[test]
fn parent_shrinking_on_disk_clamps_cursor() {
    let tree = tree();
    let mut b = browser(&tree);
    for _ in 0..11 {
        b.move_by(1);
    }
    select(&mut b, "system");
    b.activate();

    // Root loses its documents and "empty" while we are inside "system".
    tree.set_dir(
        "",
        vec![TreeEntry::directory("games"), TreeEntry::directory("system")],
    );

    b.back();
    assert_eq!(b.listing().len(), 2);
    assert_eq!(b.listing().selected().unwrap().label(), "system");
    assert_eq!(b.listing().viewport().scroll_offset(), 0);
}

#[test]
fn missing_directory_degrades_to_empty_listing() {
    let tree = tree();
    tree.set_dir("", vec![TreeEntry::directory("ghost")]);
    let mut b = browser(&tree);

    assert_eq!(b.activate(), ActivateOutcome::EnteredDirectory);
    assert!(b.listing().is_empty());
    assert_eq!(b.back(), BackOutcome::LeftDirectory);
    assert_eq!(b.listing().len(), 1);
}

#[test]
fn missing_document_opens_empty_overview() {
    let tree = tree();
    let mut b = browser(&tree);
    select(&mut b, "doc00");

    assert_eq!(b.activate(), ActivateOutcome::OpenedDocument);
    assert!(b.sections().unwrap().is_empty());
    assert_eq!(b.activate(), ActivateOutcome::Ignored);
    assert_eq!(b.back(), BackOutcome::ClosedDocument);
}
