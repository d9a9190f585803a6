// src/app/catalog.rs
use super::data::MovieRecord;
use super::filters::filtered_indices;

/// Ordered, read-only list of movies with title search.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Built-in sample listing shown by the app.
    pub fn demo() -> Self {
        Self::new(vec![
            MovieRecord::new("The Shawshank Redemption", 1994, 142),
            MovieRecord::new("The Godfather", 1972, 175),
            MovieRecord::new("The Dark Knight", 2008, 152),
            MovieRecord::new("Pulp Fiction", 1994, 154),
        ])
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&MovieRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Positions of the records whose title contains `term`, ignoring case.
    /// A blank term selects every record.
    pub fn search_indices(&self, term: &str) -> Vec<usize> {
        filtered_indices(&self.records, term)
    }

    pub fn search(&self, term: &str) -> Vec<&MovieRecord> {
        self.search_indices(term)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }
}
