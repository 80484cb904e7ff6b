/// Rows that can be narrowed down by the free-text search box.
pub trait Searchable {
    /// Fields the search looks at. `None` stands for a field the backend left out.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// `query` must already be lowercased.
    fn matches_query(&self, query: &str) -> bool {
        self.search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(query))
    }
}
