//! Paged list: rows plus a viewport

use std::fmt::Debug;

use crate::presentation::{ListRow, ListView, RowIcon};
use crate::types::{Row, RowList};
use crate::viewport::Viewport;

/// A row list navigated through a [`Viewport`].
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    rows: RowList<T>,
    viewport: Viewport,
}

impl<T: Clone + PartialEq + Debug> PagedList<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: RowList::empty(),
            viewport: Viewport::new(page_size),
        }
    }

    pub fn with_rows(rows: RowList<T>, page_size: usize) -> Self {
        Self {
            rows,
            viewport: Viewport::new(page_size),
        }
    }

    pub fn rows(&self) -> &RowList<T> {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// `None` when there is nothing to select.
    pub fn cursor(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.viewport.cursor())
    }

    pub fn move_by(&mut self, delta: i32) {
        self.viewport.move_by(delta, self.rows.len());
    }

    pub fn selected(&self) -> Option<&Row<T>> {
        self.cursor().and_then(|i| self.rows.get(i))
    }

    /// Identifier of the selected row.
    pub fn activate(&self) -> Option<T> {
        self.selected().map(|row| row.id().clone())
    }

    /// Swap in a rebuilt list.
    ///
    /// Same length keeps cursor and scroll untouched; a different length
    /// clamps the cursor and recomputes the window.
    pub fn replace_rows(&mut self, rows: RowList<T>) {
        let len_changed = rows.len() != self.rows.len();
        self.rows = rows;
        if len_changed {
            self.viewport.refit(self.rows.len());
        }
    }

    /// Swap in a new list and go back to the top.
    pub fn reset(&mut self, rows: RowList<T>) {
        self.rows = rows;
        self.viewport.reset();
    }

    pub fn view(&self) -> ListView {
        self.view_with(|_| None)
    }

    /// Visible slice, with an icon chosen per row.
    pub fn view_with(&self, icon: impl Fn(&T) -> Option<RowIcon>) -> ListView {
        let range = self.viewport.visible_range(self.rows.len());
        let cursor = self.cursor();
        let rows = self.rows.as_slice()[range.clone()]
            .iter()
            .zip(range)
            .map(|(row, index)| ListRow {
                label: row.label().to_string(),
                icon: icon(row.id()),
                selected: cursor == Some(index),
            })
            .collect();

        ListView {
            rows,
            more_above: self.viewport.has_more_above(),
            more_below: self.viewport.has_more_below(self.rows.len()),
        }
    }
}
