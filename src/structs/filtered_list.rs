use crate::traits::searchable::Searchable;

/// The full result set of a list view together with the rows the current search shows.
#[derive(Debug, Clone)]
pub struct FilteredList<T> {
    items: Vec<T>,
    filtered: Vec<T>,
    query: String,
}

impl<T> Default for FilteredList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
        }
    }
}

impl<T: Searchable + Clone> FilteredList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut list = Self::default();
        list.set_items(items);
        list
    }

    /// Replaces the full list and re-applies the current query.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
    }

    pub fn search(&mut self, query: &str) -> &[T] {
        query.clone_into(&mut self.query);
        self.refilter();
        &self.filtered
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Swaps every row matching `predicate` in both lists for `replacement`, without
    /// re-filtering, so an updated row stays visible even if it no longer matches.
    pub fn replace_where<P>(&mut self, predicate: P, replacement: &T) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let mut replaced = 0;
        for row in self.items.iter_mut().chain(self.filtered.iter_mut()) {
            if predicate(row) {
                *row = replacement.clone();
                replaced += 1;
            }
        }
        replaced
    }

    /// In-place edit of every row matching `predicate` in both lists.
    pub fn update_where<P, F>(&mut self, predicate: P, mut update: F) -> usize
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut updated = 0;
        for row in self.items.iter_mut().chain(self.filtered.iter_mut()) {
            if predicate(row) {
                update(row);
                updated += 1;
            }
        }
        updated
    }

    fn refilter(&mut self) {
        self.filtered = filter_rows(&self.items, &self.query);
    }
}

/// Case-insensitive substring filter. A blank query keeps every row.
pub fn filter_rows<T: Searchable + Clone>(rows: &[T], query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return rows.to_vec();
    }
    let needle = query.to_lowercase();
    rows.iter().filter(|row| row.matches_query(&needle)).cloned().collect()
}
