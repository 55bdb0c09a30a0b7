//! Selectable rows

use std::fmt::Debug;

/// One selectable line: a display label plus the identifier it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    label: String,
    id: T,
}

impl<T> Row<T> {
    pub fn new(label: impl Into<String>, id: T) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn id(&self) -> &T {
        &self.id
    }
}

/// Ordered rows with unique identifiers.
///
/// Never mutated in place: a changed source produces a new list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: PartialEq + Debug> RowList<T> {
    /// Build a list, dropping any row whose identifier was already seen.
    pub fn new(rows: impl IntoIterator<Item = Row<T>>) -> Self {
        let mut unique: Vec<Row<T>> = Vec::new();
        for row in rows {
            if unique.iter().any(|existing| existing.id == row.id) {
                log::warn!("Dropping duplicate row {:?} ({})", row.id, row.label);
                continue;
            }
            unique.push(row);
        }
        Self { rows: unique }
    }
}

impl<T> RowList<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row<T>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[Row<T>] {
        &self.rows
    }
}

impl<T: PartialEq + Debug> FromIterator<Row<T>> for RowList<T> {
    fn from_iter<I: IntoIterator<Item = Row<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a RowList<T> {
    type Item = &'a Row<T>;
    type IntoIter = std::slice::Iter<'a, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
