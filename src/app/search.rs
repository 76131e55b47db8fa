//! Search-overlay state: the live query and its ranked hit list.

use crate::core::find::{FuzzyIndex, SearchHit};

/// State behind the search overlay. The hit list is re-ranked on every
/// query edit; the cursor resets with it.
pub struct SearchState {
    query: String,
    hits: Vec<SearchHit>,
    selected: usize,
}

impl SearchState {
    /// Opens the overlay with an empty query, hits seeded from the baseline.
    pub fn open(index: &FuzzyIndex) -> Self {
        Self {
            query: String::new(),
            hits: index.query(""),
            selected: 0,
        }
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.hits.get(self.selected)
    }

    pub fn push_char(&mut self, c: char, index: &FuzzyIndex) {
        self.query.push(c);
        self.rerank(index);
    }

    pub fn pop_char(&mut self, index: &FuzzyIndex) {
        if self.query.pop().is_some() {
            self.rerank(index);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.hits.len() {
            self.selected += 1;
        }
    }

    fn rerank(&mut self, index: &FuzzyIndex) {
        self.hits = index.query(&self.query);
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn index_of(root: &std::path::Path) -> FuzzyIndex {
        let mut index = FuzzyIndex::new();
        index.build(root);
        index
    }

    #[test]
    fn editing_query_rebuilds_hits_and_resets_cursor()
    -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("apple.txt"), "")?;
        fs::write(tmp.path().join("banana.txt"), "")?;
        let index = index_of(tmp.path());

        let mut search = SearchState::open(&index);
        assert_eq!(search.hits().len(), 2);

        search.select_next();
        assert_eq!(search.selected(), 1);

        search.push_char('a', &index);
        search.push_char('p', &index);
        assert_eq!(search.selected(), 0);
        assert_eq!(search.query(), "ap");
        assert!(
            search
                .selected_hit()
                .is_some_and(|h| h.relative() == "apple.txt")
        );

        search.pop_char(&index);
        search.pop_char(&index);
        assert_eq!(search.hits().len(), 2);
        Ok(())
    }

    #[test]
    fn cursor_clamps_to_hit_list() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("only.txt"), "")?;
        let index = index_of(tmp.path());

        let mut search = SearchState::open(&index);
        search.select_prev();
        assert_eq!(search.selected(), 0);
        search.select_next();
        assert_eq!(search.selected(), 0);
        Ok(())
    }
}
