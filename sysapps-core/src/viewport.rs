//! Cursor and scroll window over a list of known length
//!
//! The window scrolls one row at a time: moving past the bottom edge shifts
//! it down by one, moving above the top edge shifts it up by one. Given the
//! same list length and the same moves, the state is always the same.
//!
//! ```text
//!   n = 10, page_size = 7
//!
//!   cursor 6            cursor 7            cursor 8
//!   ┌ 0 ┐               0                   0
//!   │ 1 │               ┌ 1 ┐               1
//!   │ … │               │ … │               ┌ 2 ┐
//!   └ 6◀┘               └ 7◀┘               └ 8◀┘
//!   scroll 0            scroll 1            scroll 2
//! ```

use std::ops::Range;

/// Cursor position plus the first visible row of a fixed-height window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    scroll_offset: usize,
    page_size: usize,
}

impl Viewport {
    /// A page size of 0 is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Apply one move over a list of `len` rows. Only the sign of `delta` counts.
    pub fn move_by(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        if self.cursor >= len {
            self.refit(len);
        }

        match delta.signum() {
            1 => self.cursor = (self.cursor + 1).min(len - 1),
            -1 => self.cursor = self.cursor.saturating_sub(1),
            _ => {}
        }

        if self.cursor >= self.scroll_offset + self.page_size {
            self.scroll_offset += 1;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset -= 1;
        }
    }

    /// Fit the state to a list whose length changed.
    ///
    /// The cursor is clamped to the last row and the window is placed where a
    /// sequence of downward moves from the top would have left it.
    pub fn refit(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        self.scroll_offset = if len <= self.page_size {
            0
        } else {
            (self.cursor + 1).saturating_sub(self.page_size)
        };
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Indices of the rows inside the window.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (self.scroll_offset + self.page_size).min(len);
        start..end
    }

    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    pub fn has_more_below(&self, len: usize) -> bool {
        self.scroll_offset + self.page_size < len
    }
}
