//! Display model for the glossary table
//!
//! [`TableView`] holds a snapshot of the store shaped for rendering: one row of
//! cells per entry, exactly as wide as the header. It is rebuilt wholesale by
//! [`TableView::sync`] whenever the store changes, so the table never shows a
//! half-updated state.

use crate::store::WordList;
use std::ops::Range;

#[derive(Debug, Default)]
pub struct TableView {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    selected: Option<usize>,
    scroll: usize,
}

impl TableView {
    pub fn new(store: &WordList) -> Self {
        let mut view = TableView::default();
        view.sync(store);
        view
    }

    /// Drop every row and rebuild from `store` in entry order.
    ///
    /// Rows are padded with empty cells up to the header width; columns past
    /// the header are not shown. The selection is kept if it is still in range.
    pub fn sync(&mut self, store: &WordList) {
        self.columns = store.header().to_vec();
        let width = self.columns.len();

        self.rows.clear();
        self.rows.extend(store.iter().map(|entry| {
            let mut cells: Vec<String> = entry.record().take(width).map(str::to_string).collect();
            cells.resize(width, String::new());
            cells
        }));

        self.selected = match self.selected {
            _ if self.rows.is_empty() => None,
            Some(i) => Some(i.min(self.rows.len() - 1)),
            None => None,
        };
        if self.scroll >= self.rows.len() {
            self.scroll = self.rows.len().saturating_sub(1);
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Highlight row `index`, clamped to the last row
    pub fn select(&mut self, index: usize) {
        self.selected = if self.rows.is_empty() {
            None
        } else {
            Some(index.min(self.rows.len() - 1))
        };
    }

    pub fn select_next(&mut self, step: usize) {
        let next = self.selected.map_or(0, |i| i.saturating_add(step));
        self.select(next);
    }

    pub fn select_prev(&mut self, step: usize) {
        let prev = self.selected.map_or(0, |i| i.saturating_sub(step));
        self.select(prev);
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }

    /// Rows that fit in `height` lines, scrolled so the selection is visible
    pub fn visible_range(&mut self, height: usize) -> Range<usize> {
        let height = height.max(1);
        if self.rows.len() <= height {
            self.scroll = 0;
        } else {
            if let Some(selected) = self.selected {
                if selected < self.scroll {
                    self.scroll = selected;
                } else if selected >= self.scroll + height {
                    self.scroll = selected + 1 - height;
                }
            }
            self.scroll = self.scroll.min(self.rows.len() - height);
        }
        self.scroll..(self.scroll + height).min(self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_rows(n: usize) -> TableView {
        TableView {
            columns: vec!["a".into()],
            rows: (0..n).map(|i| vec![i.to_string()]).collect(),
            selected: None,
            scroll: 0,
        }
    }

    #[test]
    fn visible_range_follows_selection() {
        let mut view = view_with_rows(10);
        assert_eq!(view.visible_range(4), 0..4);

        view.select(6);
        assert_eq!(view.visible_range(4), 3..7);

        view.select(1);
        assert_eq!(view.visible_range(4), 1..5);

        view.select_last();
        assert_eq!(view.visible_range(4), 6..10);
    }

    #[test]
    fn visible_range_without_overflow_starts_at_zero() {
        let mut view = view_with_rows(3);
        view.select(2);
        assert_eq!(view.visible_range(10), 0..3);
    }

    #[test]
    fn selection_moves_are_clamped() {
        let mut view = view_with_rows(3);
        view.select_prev(1);
        assert_eq!(view.selected(), Some(0));
        view.select_next(10);
        assert_eq!(view.selected(), Some(2));

        let mut empty = view_with_rows(0);
        empty.select_next(1);
        assert_eq!(empty.selected(), None);
    }
}
