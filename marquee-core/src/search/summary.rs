use std::fmt;

use super::SearchCriteria;

/// One-line description of a search and how many movies it found.
///
/// ```
/// use marquee_core::{SearchCriteria, SearchSummary};
///
/// let criteria = SearchCriteria::new(Some("the"), None, Some("Crime/Drama"));
/// assert_eq!(
///     SearchSummary::new(&criteria, 1).to_string(),
///     "Searched for movies with name containing 'the' and in genre \
///      'Crime/Drama'. Found 1 movie.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchSummary<'a> {
    criteria: &'a SearchCriteria,
    result_count: usize,
}

impl<'a> SearchSummary<'a> {
    /// Summary of a search under `criteria` that found `result_count` movies.
    pub fn new(criteria: &'a SearchCriteria, result_count: usize) -> Self {
        Self {
            criteria,
            result_count,
        }
    }
}

impl fmt::Display for SearchSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = Vec::with_capacity(3);
        if let Some(name) = self.criteria.name() {
            clauses.push(format!("with name containing '{name}'"));
        }
        if let Some(id) = self.criteria.id() {
            clauses.push(format!("with ID {id}"));
        }
        if let Some(genre) = self.criteria.genre() {
            clauses.push(format!("in genre '{genre}'"));
        }

        f.write_str("Searched for movies")?;
        if !clauses.is_empty() {
            write!(f, " {}", clauses.join(" and "))?;
        }

        let noun = if self.result_count == 1 { "movie" } else { "movies" };
        write!(f, ". Found {} {noun}.", self.result_count)
    }
}
